//! Stateless arithmetic behind the calculator, multiplication and addition
//! endpoints.
//!
//! Subtraction yields the absolute difference and division divides the larger
//! operand by the smaller one. Integer results use checked arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Error;

/// Supported calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `x + y`.
    Add,
    /// Absolute difference of the operands.
    Subtract,
    /// `x * y`.
    Multiply,
    /// Larger operand divided by the smaller.
    Divide,
}

impl Operation {
    /// Stable lowercase name used in payloads and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation to the operands.
    ///
    /// # Examples
    /// ```
    /// use registry_backend::domain::{CalculationResult, Operation};
    ///
    /// let result = Operation::Subtract.apply(3, 10).expect("in range");
    /// assert_eq!(result, CalculationResult::Integer(7));
    /// ```
    pub fn apply(self, x: i64, y: i64) -> Result<CalculationResult, ArithmeticError> {
        match self {
            Self::Add => add(x, y).map(CalculationResult::Integer),
            Self::Subtract => subtract(x, y).map(CalculationResult::Integer),
            Self::Multiply => multiply(x, y).map(CalculationResult::Integer),
            Self::Divide => divide(x, y).map(CalculationResult::Fraction),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures raised by arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The smaller operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The integer result does not fit in 64 bits.
    #[error("{operation} result overflows a 64-bit integer")]
    Overflow { operation: Operation },
}

impl From<ArithmeticError> for Error {
    fn from(value: ArithmeticError) -> Self {
        let message = value.to_string();
        let details = match value {
            ArithmeticError::DivisionByZero => json!({
                "code": "division_by_zero",
                "operation": Operation::Divide,
            }),
            ArithmeticError::Overflow { operation } => json!({
                "code": "overflow",
                "operation": operation,
            }),
        };
        Error::invalid_request(message).with_details(details)
    }
}

/// Numeric outcome of an operation; serialises as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResult {
    /// Exact integer result.
    Integer(i64),
    /// Floating-point quotient.
    Fraction(f64),
}

/// Sum of the operands.
pub fn add(x: i64, y: i64) -> Result<i64, ArithmeticError> {
    x.checked_add(y).ok_or(ArithmeticError::Overflow {
        operation: Operation::Add,
    })
}

/// Absolute difference of the operands.
pub fn subtract(x: i64, y: i64) -> Result<i64, ArithmeticError> {
    let (larger, smaller) = if x > y { (x, y) } else { (y, x) };
    larger.checked_sub(smaller).ok_or(ArithmeticError::Overflow {
        operation: Operation::Subtract,
    })
}

/// Product of the operands.
pub fn multiply(x: i64, y: i64) -> Result<i64, ArithmeticError> {
    x.checked_mul(y).ok_or(ArithmeticError::Overflow {
        operation: Operation::Multiply,
    })
}

/// Larger operand divided by the smaller.
pub fn divide(x: i64, y: i64) -> Result<f64, ArithmeticError> {
    let (larger, smaller) = if x > y { (x, y) } else { (y, x) };
    if smaller == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(larger as f64 / smaller as f64)
}
