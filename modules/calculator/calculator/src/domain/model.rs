//! Unvalidated calculation input, as received at the service boundary.

/// One operand as the caller sent it.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A JSON number
    Number(f64),
    /// A JSON string; numeric text is accepted
    Text(String),
    /// Missing, `null`, or a non-scalar JSON value
    Absent,
}

impl Operand {
    /// The finite numeric value of this operand, if it has one.
    ///
    /// Text is trimmed before parsing. Empty text, non-numeric text and
    /// non-finite values (`"NaN"`, `"inf"`) have no value.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Absent => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Short description used in validation errors.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Number(value) => format!("{value} is not finite"),
            Self::Text(text) => format!("'{text}' is not a number"),
            Self::Absent => "missing or not a number".to_owned(),
        }
    }
}

/// A calculation whose operands and operator have not been checked yet.
#[derive(Debug, Clone, PartialEq)]
pub struct UncheckedCalculation {
    pub num1: Operand,
    pub num2: Operand,
    /// Operator symbol; `None` when the caller sent a non-string value
    pub operator: Option<String>,
}
