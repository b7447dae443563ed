//! Pure input state machine.
//!
//! [`transition`] maps the current [`InputState`] and one [`Event`] to the next
//! state. It never performs I/O: an "equals" press yields a request in the
//! returned [`Step`], and the reply is fed back as another event.

use std::fmt;

use calculator_sdk::{CalculationRequest, Operator};

use crate::key::Key;

/// Everything the keypad remembers between keystrokes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Text typed for the operand being entered
    pub current_input: String,
    pub first_operand: Option<f64>,
    pub operator: Option<Operator>,
    /// An operator was chosen and the second operand has not started yet
    pub awaiting_second_operand: bool,
}

/// Coarse position in the entry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FirstOperandEntry,
    OperatorPending,
    SecondOperandEntry,
    /// The last calculation failed; the state has been reset
    Error,
}

impl InputState {
    /// Phase implied by the fields alone; `Error` is a property of the screen.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.operator, self.current_input.is_empty()) {
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::SecondOperandEntry,
            (None, false) => Phase::FirstOperandEntry,
            (None, true) if self.first_operand.is_some() => Phase::FirstOperandEntry,
            (None, true) => Phase::Idle,
        }
    }
}

/// What the keypad shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    Text(String),
    #[default]
    Blank,
    /// Rendered as the literal text `Error`
    Error,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Blank => Ok(()),
            Self::Error => f.write_str("Error"),
        }
    }
}

/// Input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Key(Key),
    /// The service answered with a number
    Resolved(f64),
    /// The service refused or could not be reached
    Failed,
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: InputState,
    /// New screen content; `None` leaves the screen as it was
    pub screen: Option<Screen>,
    /// Calculation to send to the service
    pub request: Option<CalculationRequest>,
}

impl Step {
    fn unchanged(state: InputState) -> Self {
        Self {
            state,
            screen: None,
            request: None,
        }
    }

    fn show(state: InputState, screen: Screen) -> Self {
        Self {
            state,
            screen: Some(screen),
            request: None,
        }
    }
}

fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Apply one event to `state`.
#[must_use]
pub fn transition(state: InputState, event: Event) -> Step {
    match event {
        Event::Key(Key::Digit(d)) => push_char(state, char::from(b'0' + d.min(9))),
        Event::Key(Key::Point) if state.current_input.contains('.') => Step::unchanged(state),
        Event::Key(Key::Point) => push_char(state, '.'),
        Event::Key(Key::Operator(op)) => choose_operator(state, op),
        Event::Key(Key::Equals) => equals(state),
        Event::Key(Key::AllClear) => Step::show(InputState::default(), Screen::Blank),
        Event::Resolved(value) => {
            let text = value.to_string();
            let next = InputState {
                current_input: text.clone(),
                first_operand: Some(value),
                operator: None,
                awaiting_second_operand: false,
            };
            Step::show(next, Screen::Text(text))
        }
        Event::Failed => Step::show(InputState::default(), Screen::Error),
    }
}

fn push_char(mut state: InputState, c: char) -> Step {
    state.current_input.push(c);
    state.awaiting_second_operand = false;
    let screen = Screen::Text(state.current_input.clone());
    Step::show(state, screen)
}

fn choose_operator(mut state: InputState, op: Operator) -> Step {
    // A captured first operand (including a chained result) is never re-read.
    if state.first_operand.is_none() {
        match parse_operand(&state.current_input) {
            Some(value) => state.first_operand = Some(value),
            None => return Step::unchanged(state),
        }
    }

    state.operator = Some(op);
    state.current_input.clear();
    state.awaiting_second_operand = true;
    Step::unchanged(state)
}

fn equals(state: InputState) -> Step {
    let (Some(num1), Some(operator)) = (state.first_operand, state.operator) else {
        return Step::unchanged(state);
    };
    if state.current_input.is_empty() {
        return Step::unchanged(state);
    }

    match parse_operand(&state.current_input) {
        Some(num2) => Step {
            state,
            screen: None,
            request: Some(CalculationRequest::new(num1, operator, num2)),
        },
        None => transition(state, Event::Failed),
    }
}
