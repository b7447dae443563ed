//! Domain layer for calculator module
//!
//! Contains input validation and the arithmetic itself.

pub mod error;
pub mod model;
pub mod service;

pub use error::DomainError;
pub use model::{Operand, UncheckedCalculation};
pub use service::Service;
