//! Contract types shared by the calculation service and its clients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Binary arithmetic operator.
///
/// Serialized as its symbol (`"+"`, `"-"`, `"*"`, `"/"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Every supported operator, in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The wire symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Look up an operator by its exact symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a symbol is not one of `+ - * /`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownOperator(s.to_owned()))
    }
}

/// A single binary operation submitted to the service.
///
/// Built by the keypad only when both operands and the operator are known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// First operand
    #[serde(serialize_with = "crate::wire::serialize_json_number")]
    pub num1: f64,
    /// Second operand
    #[serde(serialize_with = "crate::wire::serialize_json_number")]
    pub num2: f64,
    /// Operator applied as `num1 <operator> num2`
    pub operator: Operator,
}

impl CalculationRequest {
    #[must_use]
    pub const fn new(num1: f64, operator: Operator, num2: f64) -> Self {
        Self {
            num1,
            num2,
            operator,
        }
    }
}

/// Machine-readable reason a calculation was rejected by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An operand is not a well-formed finite number
    InvalidOperand,
    /// Division with a second operand of exactly zero
    DivisionByZero,
    /// Operator symbol outside `+ - * /`
    InvalidOperator,
    /// Finite operands produced a non-finite result
    ResultOutOfRange,
    /// Request body is not a JSON object
    MalformedRequest,
}

impl ErrorKind {
    /// Human-readable message carried in the `result` field of a failure body.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidOperand => "Error: Invalid number input",
            Self::DivisionByZero => "Error: Division by zero",
            Self::InvalidOperator => "Error: Invalid operator",
            Self::ResultOutOfRange => "Error: Result out of range",
            Self::MalformedRequest => "Error: Malformed request body",
        }
    }

    /// Recover the kind from a failure message, for servers that omit `code`.
    #[must_use]
    pub fn from_message(message: &str) -> Option<Self> {
        [
            Self::InvalidOperand,
            Self::DivisionByZero,
            Self::InvalidOperator,
            Self::ResultOutOfRange,
            Self::MalformedRequest,
        ]
        .into_iter()
        .find(|kind| kind.message() == message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::InvalidOperand => "invalid_operand",
            Self::DivisionByZero => "division_by_zero",
            Self::InvalidOperator => "invalid_operator",
            Self::ResultOutOfRange => "result_out_of_range",
            Self::MalformedRequest => "malformed_request",
        };
        f.write_str(code)
    }
}

/// Tagged result of one calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    Success { value: f64 },
    Failure { kind: ErrorKind, message: String },
}

impl CalculationOutcome {
    /// Failure carrying the canonical message for `kind`.
    #[must_use]
    pub fn failure(kind: ErrorKind) -> Self {
        Self::Failure {
            kind,
            message: kind.message().to_owned(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
