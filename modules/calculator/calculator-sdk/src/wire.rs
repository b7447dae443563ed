//! JSON body of `POST /calculate` responses.
//!
//! Success and failure share one shape, `{ "result": ... }`. The `result`
//! field holds a number on success and an error message on failure; failures
//! also carry a `code` discriminator. [`CalculationOutcome`] is the tagged form
//! used everywhere else.

use serde::{Deserialize, Serialize, Serializer};

use crate::models::{CalculationOutcome, ErrorKind};

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize an `f64` the way a JavaScript peer would: integral values as JSON
/// integers (`5`, not `5.0`), everything else as a float.
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
pub fn serialize_json_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)] // integral and within 2^53
        let integral = *value as i64;
        serializer.serialize_i64(integral)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// The `result` field: a number on success, a message on failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum ResultField {
    Value(f64),
    Message(String),
}

impl Serialize for ResultField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serialize_json_number(value, serializer),
            Self::Message(message) => serializer.serialize_str(message),
        }
    }
}

/// Response body of `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct CalculationResponse {
    pub result: ResultField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorKind>,
}

/// A response body that does not describe a valid outcome.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("numeric result carries error code '{0}'")]
    CodeOnSuccess(ErrorKind),

    #[error("unrecognized failure message '{0}' without error code")]
    UnknownFailure(String),
}

impl From<CalculationOutcome> for CalculationResponse {
    fn from(outcome: CalculationOutcome) -> Self {
        match outcome {
            CalculationOutcome::Success { value } => Self {
                result: ResultField::Value(value),
                code: None,
            },
            CalculationOutcome::Failure { kind, message } => Self {
                result: ResultField::Message(message),
                code: Some(kind),
            },
        }
    }
}

impl TryFrom<CalculationResponse> for CalculationOutcome {
    type Error = WireError;

    fn try_from(body: CalculationResponse) -> Result<Self, Self::Error> {
        match (body.result, body.code) {
            (ResultField::Value(value), None) => Ok(Self::Success { value }),
            (ResultField::Value(_), Some(kind)) => Err(WireError::CodeOnSuccess(kind)),
            (ResultField::Message(message), Some(kind)) => Ok(Self::Failure { kind, message }),
            (ResultField::Message(message), None) => match ErrorKind::from_message(&message) {
                Some(kind) => Ok(Self::Failure { kind, message }),
                None => Err(WireError::UnknownFailure(message)),
            },
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_integral_result_as_integer() {
        let body = CalculationResponse::from(CalculationOutcome::Success { value: 5.0 });
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"result":5}"#);
    }

    #[test]
    fn success_serializes_fractional_result_as_float() {
        let body = CalculationResponse::from(CalculationOutcome::Success { value: 2.5 });
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"result": 2.5}));
    }

    #[test]
    fn huge_integral_result_stays_float() {
        let body = CalculationResponse::from(CalculationOutcome::Success { value: 1e300 });
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["result"].is_f64());
    }

    #[test]
    fn failure_serializes_message_and_code() {
        let body =
            CalculationResponse::from(CalculationOutcome::failure(ErrorKind::DivisionByZero));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"result": "Error: Division by zero", "code": "division_by_zero"})
        );
    }

    #[test]
    fn legacy_failure_without_code_is_decoded_from_message() {
        let body: CalculationResponse =
            serde_json::from_value(json!({"result": "Error: Invalid operator"})).unwrap();
        let outcome = CalculationOutcome::try_from(body).unwrap();
        assert_eq!(outcome, CalculationOutcome::failure(ErrorKind::InvalidOperator));
    }

    #[test]
    fn unknown_failure_without_code_is_rejected() {
        let body: CalculationResponse =
            serde_json::from_value(json!({"result": "boom"})).unwrap();
        assert_eq!(
            CalculationOutcome::try_from(body),
            Err(WireError::UnknownFailure("boom".to_owned()))
        );
    }

    #[test]
    fn numeric_result_with_code_is_rejected() {
        let body: CalculationResponse =
            serde_json::from_value(json!({"result": 1, "code": "invalid_operand"})).unwrap();
        assert!(CalculationOutcome::try_from(body).is_err());
    }
}
