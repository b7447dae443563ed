use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Operand, UncheckedCalculation};

/// Request body of `POST /calculate`.
///
/// Fields are kept as raw JSON so that a wrong operand type is reported as an
/// invalid operand rather than a malformed body.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CalculateRequest {
    #[serde(default)]
    #[schema(value_type = f64)]
    pub num1: Value,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub num2: Value,
    /// One of `+`, `-`, `*`, `/`
    #[serde(default)]
    #[schema(value_type = String)]
    pub operator: Value,
}

fn operand(value: Value) -> Operand {
    match value {
        Value::Number(n) => n.as_f64().map_or(Operand::Absent, Operand::Number),
        Value::String(s) => Operand::Text(s),
        _ => Operand::Absent,
    }
}

impl From<CalculateRequest> for UncheckedCalculation {
    fn from(req: CalculateRequest) -> Self {
        Self {
            num1: operand(req.num1),
            num2: operand(req.num2),
            operator: match req.operator {
                Value::String(s) => Some(s),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(body: Value) -> UncheckedCalculation {
        serde_json::from_value::<CalculateRequest>(body).unwrap().into()
    }

    #[test]
    fn numbers_and_strings_map_to_operands() {
        let input = convert(json!({"num1": 2, "num2": "3.5", "operator": "+"}));
        assert_eq!(input.num1, Operand::Number(2.0));
        assert_eq!(input.num2, Operand::Text("3.5".to_owned()));
        assert_eq!(input.operator.as_deref(), Some("+"));
    }

    #[test]
    fn other_json_types_are_absent() {
        let input = convert(json!({"num1": null, "num2": [1], "operator": 7}));
        assert_eq!(input.num1, Operand::Absent);
        assert_eq!(input.num2, Operand::Absent);
        assert_eq!(input.operator, None);

        let input = convert(json!({"num1": true, "num2": {"v": 1}}));
        assert_eq!(input.num1, Operand::Absent);
        assert_eq!(input.num2, Operand::Absent);
    }

    #[test]
    fn missing_fields_are_absent() {
        let input = convert(json!({}));
        assert_eq!(input.num1, Operand::Absent);
        assert_eq!(input.operator, None);
    }
}
