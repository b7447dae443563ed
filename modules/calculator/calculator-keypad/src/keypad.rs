use std::sync::Arc;

use calculator_sdk::CalculatorClient;
use tracing::{debug, warn};

use crate::key::Key;
use crate::state::{Event, InputState, Phase, Screen, transition};

/// Keypad front end: owns the input state and talks to the service.
///
/// `press` takes `&mut self`, so at most one calculation is in flight.
pub struct Keypad {
    client: Arc<dyn CalculatorClient>,
    state: InputState,
    screen: Screen,
}

impl Keypad {
    #[must_use]
    pub fn new(client: Arc<dyn CalculatorClient>) -> Self {
        Self {
            client,
            state: InputState::default(),
            screen: Screen::Blank,
        }
    }

    /// Handle one key press and return the screen afterwards.
    ///
    /// An "equals" press waits for the service; any failure resets the
    /// keypad and shows `Error`.
    pub async fn press(&mut self, key: Key) -> &Screen {
        debug!(%key, "key pressed");
        let step = transition(std::mem::take(&mut self.state), Event::Key(key));
        self.apply(step.state, step.screen);

        if let Some(request) = step.request {
            let event = match self.client.calculate(&request).await {
                Ok(value) => Event::Resolved(value),
                Err(err) => {
                    warn!(error = %err, operator = %request.operator, "calculation failed");
                    Event::Failed
                }
            };
            let step = transition(std::mem::take(&mut self.state), event);
            self.apply(step.state, step.screen);
        }

        &self.screen
    }

    fn apply(&mut self, state: InputState, screen: Option<Screen>) {
        self.state = state;
        if let Some(screen) = screen {
            self.screen = screen;
        }
    }

    #[must_use]
    pub fn state(&self) -> &InputState {
        &self.state
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.screen == Screen::Error && self.state == InputState::default() {
            Phase::Error
        } else {
            self.state.phase()
        }
    }
}

impl std::fmt::Debug for Keypad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypad")
            .field("state", &self.state)
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}
