#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Calculator Keypad
//!
//! Client-side input handling for the calculator:
//! - `Key` and `parse_keys` for button tokens (`0`-`9`, `.`, `+ - * /`, `=`, `AC`)
//! - `transition`, a pure state machine over `InputState`
//! - `Keypad`, which drives the state machine and sends requests through any
//!   `calculator_sdk::CalculatorClient`

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod key;
pub use key::{Key, KeyParseError, parse_keys};

pub mod state;
pub use state::{Event, InputState, Phase, Screen, Step, transition};

mod keypad;
pub use keypad::Keypad;
