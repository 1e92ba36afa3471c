//! Core calculator: four binary operations and the history they feed
//!
//! Every call on [`Calculator`] appends exactly one [`HistoryEntry`],
//! including a division whose divisor is zero.

pub mod history;
mod operations;
pub mod shared;

pub use history::{History, HistoryEntry};
pub use operations::{Calculator, Operation};
pub use shared::SharedCalculator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Division by zero is the only semantic failure. Non-finite and NaN
/// operands are accepted and follow IEEE 754 arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division attempted with a divisor equal to zero
    #[error("Division by zero")]
    DivisionByZero,
}

/// Result of one operation as recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Numeric result (may be NaN or infinite)
    Value(f64),
    /// The divisor was zero; no quotient was computed
    DivisionByZero,
}

impl Outcome {
    /// Returns the numeric value, if any
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::DivisionByZero => None,
        }
    }

    /// Returns true for the division-by-zero marker
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// Converts into a `CalcResult`
    pub fn into_result(self) -> CalcResult<f64> {
        match self {
            Self::Value(v) => Ok(v),
            Self::DivisionByZero => Err(CalcError::DivisionByZero),
        }
    }
}

impl From<CalcResult<f64>> for Outcome {
    fn from(result: CalcResult<f64>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(CalcError::DivisionByZero) => Self::DivisionByZero,
        }
    }
}

impl From<f64> for Outcome {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}
