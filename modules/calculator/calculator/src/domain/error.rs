use calculator_sdk::ErrorKind;

/// Reasons the service refuses a calculation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid operand {operand}: {detail}")]
    InvalidOperand {
        operand: &'static str,
        detail: String,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid operator '{0}'")]
    InvalidOperator(String),

    #[error("result of {operation} is not a finite number")]
    ResultOutOfRange { operation: String },

    #[error("malformed request body: {0}")]
    MalformedRequest(String),
}

impl DomainError {
    /// Wire-level classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOperand { .. } => ErrorKind::InvalidOperand,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InvalidOperator(_) => ErrorKind::InvalidOperator,
            Self::ResultOutOfRange { .. } => ErrorKind::ResultOutOfRange,
            Self::MalformedRequest(_) => ErrorKind::MalformedRequest,
        }
    }
}
