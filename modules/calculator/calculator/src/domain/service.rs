//! Domain service for calculator
//!
//! Contains the core business logic: validate, then apply one operator.

use calculator_sdk::{CalculationRequest, Operator};
use tracing::{debug, instrument};

use super::error::DomainError;
use super::model::{Operand, UncheckedCalculation};

/// Domain service that performs binary arithmetic.
///
/// Stateless: identical inputs always produce identical outputs.
#[derive(Debug, Clone, Default)]
pub struct Service;

#[allow(clippy::unused_self)]
impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate raw input and evaluate it.
    ///
    /// The operator is checked first, so an unknown symbol is reported as
    /// [`DomainError::InvalidOperator`] whatever the operands are.
    ///
    /// # Errors
    /// Returns a [`DomainError`] describing the first failed check.
    #[instrument(skip(self, input), level = "debug", fields(operator = ?input.operator))]
    pub fn calculate(&self, input: &UncheckedCalculation) -> Result<f64, DomainError> {
        let operator = input
            .operator
            .as_deref()
            .and_then(Operator::from_symbol)
            .ok_or_else(|| {
                DomainError::InvalidOperator(input.operator.clone().unwrap_or_default())
            })?;

        let num1 = operand_value("num1", &input.num1)?;
        let num2 = operand_value("num2", &input.num2)?;

        evaluate(num1, operator, num2)
    }

    /// Evaluate an already typed request.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidOperand`] for non-finite operands, and the
    /// same arithmetic errors as [`Service::calculate`].
    pub fn apply(&self, request: &CalculationRequest) -> Result<f64, DomainError> {
        let num1 = operand_value("num1", &Operand::Number(request.num1))?;
        let num2 = operand_value("num2", &Operand::Number(request.num2))?;

        evaluate(num1, request.operator, num2)
    }
}

fn operand_value(name: &'static str, operand: &Operand) -> Result<f64, DomainError> {
    operand.value().ok_or_else(|| DomainError::InvalidOperand {
        operand: name,
        detail: operand.describe(),
    })
}

fn evaluate(num1: f64, operator: Operator, num2: f64) -> Result<f64, DomainError> {
    let result = match operator {
        Operator::Add => num1 + num2,
        Operator::Subtract => num1 - num2,
        Operator::Multiply => num1 * num2,
        Operator::Divide => {
            if num2 == 0.0 {
                return Err(DomainError::DivisionByZero);
            }
            num1 / num2
        }
    };

    if !result.is_finite() {
        return Err(DomainError::ResultOutOfRange {
            operation: format!("{num1} {operator} {num2}"),
        });
    }

    debug!(num1, num2, result, "calculation performed");
    Ok(result)
}
