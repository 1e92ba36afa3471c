//! Operation selector and the calculator that records every call

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::history::{History, HistoryEntry};
use crate::core::{CalcError, CalcResult, Outcome};
use crate::input::InputError;

/// The four supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations, in selector order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the selector name used by the form and the console
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operation without recording anything
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> Outcome {
        match self {
            Self::Add => Outcome::Value(a + b),
            Self::Subtract => Outcome::Value(a - b),
            Self::Multiply => Outcome::Value(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Outcome::DivisionByZero
                } else {
                    Outcome::Value(a / b)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.name() == selector)
            .ok_or_else(|| InputError::UnknownOperation(selector.to_string()))
    }
}

/// Calculator holding the history of every operation performed on it
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    /// Creates a calculator with an empty history
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Addition: a + b
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = a + b;
        self.record_entry(a, b, Operation::Add, Outcome::Value(result));
        result
    }

    /// Subtraction: a - b
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let result = a - b;
        self.record_entry(a, b, Operation::Subtract, Outcome::Value(result));
        result
    }

    /// Multiplication: a * b
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = a * b;
        self.record_entry(a, b, Operation::Multiply, Outcome::Value(result));
        result
    }

    /// Division: a / b
    ///
    /// A zero divisor yields `CalcError::DivisionByZero`; the attempt is
    /// still recorded, with the marker as its result.
    pub fn divide(&mut self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            self.record_entry(a, b, Operation::Divide, Outcome::DivisionByZero);
            return Err(CalcError::DivisionByZero);
        }
        let result = a / b;
        self.record_entry(a, b, Operation::Divide, Outcome::Value(result));
        Ok(result)
    }

    /// Performs `op` on two operands
    pub fn calculate(&mut self, op: Operation, a: f64, b: f64) -> Outcome {
        match op {
            Operation::Add => Outcome::Value(self.add(a, b)),
            Operation::Subtract => Outcome::Value(self.subtract(a, b)),
            Operation::Multiply => Outcome::Value(self.multiply(a, b)),
            Operation::Divide => Outcome::from(self.divide(a, b)),
        }
    }

    /// Read-only view of the history, oldest first
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Owned copy of the history
    #[must_use]
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.to_vec()
    }

    fn record_entry(&mut self, a: f64, b: f64, operation: Operation, result: Outcome) {
        tracing::debug!(
            operation = operation.name(),
            operand1 = a,
            operand2 = b,
            ?result,
            "recording history entry"
        );
        self.history.push(HistoryEntry::new(a, b, operation, result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Operation enum tests =====

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Add.name(), "add");
        assert_eq!(Operation::Subtract.name(), "subtract");
        assert_eq!(Operation::Multiply.name(), "multiply");
        assert_eq!(Operation::Divide.name(), "divide");
    }

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "/");
    }

    #[test]
    fn test_operation_display_is_name() {
        assert_eq!(Operation::Multiply.to_string(), "multiply");
    }

    #[test]
    fn test_operation_from_str() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
        assert_eq!(" divide ".parse::<Operation>(), Ok(Operation::Divide));
    }

    #[test]
    fn test_operation_from_str_rejects_unknown() {
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(InputError::UnknownOperation("modulo".into()))
        );
        assert!("Add".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_operation_apply_does_not_record() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Outcome::Value(5.0));
        assert_eq!(Operation::Divide.apply(1.0, 0.0), Outcome::DivisionByZero);
    }

    #[test]
    fn test_operation_serde_lowercase() {
        let json = serde_json::to_string(&Operation::Subtract).unwrap();
        assert_eq!(json, r#""subtract""#);
        let op: Operation = serde_json::from_str(r#""divide""#).unwrap();
        assert_eq!(op, Operation::Divide);
    }

    // ===== Calculator tests =====

    #[test]
    fn test_add_records_entry() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(2.0, 3.0), 5.0);
        assert_eq!(
            calc.history_snapshot(),
            vec![HistoryEntry::new(2.0, 3.0, Operation::Add, Outcome::Value(5.0))]
        );
    }

    #[test]
    fn test_subtract_negative_result() {
        let mut calc = Calculator::new();
        assert_eq!(calc.subtract(5.0, 7.0), -2.0);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_multiply_by_zero() {
        let mut calc = Calculator::new();
        assert_eq!(calc.multiply(4.0, 0.0), 0.0);
    }

    #[test]
    fn test_divide() {
        let mut calc = Calculator::new();
        assert_eq!(calc.divide(10.0, 2.0), Ok(5.0));
        assert_eq!(
            calc.history().last().unwrap().result(),
            Outcome::Value(5.0)
        );
    }

    #[test]
    fn test_divide_by_zero_records_marker() {
        let mut calc = Calculator::new();
        assert_eq!(calc.divide(7.0, 0.0), Err(CalcError::DivisionByZero));
        let last = calc.history().last().unwrap();
        assert_eq!(last.result(), Outcome::DivisionByZero);
        assert_eq!(last.operation(), Operation::Divide);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_divide_by_negative_zero() {
        let mut calc = Calculator::new();
        assert_eq!(calc.divide(1.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_tiny_divisor_is_not_zero() {
        let mut calc = Calculator::new();
        let result = calc.divide(1.0, f64::MIN_POSITIVE).unwrap();
        assert_eq!(result, 1.0 / f64::MIN_POSITIVE);
        assert!(!calc.history().last().unwrap().result().is_error());
    }

    #[test]
    fn test_non_finite_operands_propagate() {
        let mut calc = Calculator::new();
        assert!(calc.add(f64::NAN, 1.0).is_nan());
        assert_eq!(calc.multiply(f64::INFINITY, 2.0), f64::INFINITY);
        assert!(calc.subtract(f64::INFINITY, f64::INFINITY).is_nan());
        assert_eq!(calc.divide(f64::NAN, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(calc.history().len(), 4);
    }

    #[test]
    fn test_calculate_dispatch() {
        let mut calc = Calculator::new();
        assert_eq!(calc.calculate(Operation::Add, 1.0, 1.0), Outcome::Value(2.0));
        assert_eq!(
            calc.calculate(Operation::Divide, 1.0, 0.0),
            Outcome::DivisionByZero
        );
        assert_eq!(
            calc.calculate(Operation::Multiply, 2.0, 2.0),
            Outcome::Value(4.0)
        );
        let results: Vec<Outcome> = calc.history().iter().map(HistoryEntry::result).collect();
        assert_eq!(
            results,
            vec![
                Outcome::Value(2.0),
                Outcome::DivisionByZero,
                Outcome::Value(4.0)
            ]
        );
    }

    #[test]
    fn test_history_snapshot_is_detached() {
        let mut calc = Calculator::new();
        calc.add(1.0, 2.0);
        let mut snapshot = calc.history_snapshot();
        snapshot.clear();
        snapshot.push(HistoryEntry::new(9.0, 9.0, Operation::Add, Outcome::Value(18.0)));

        calc.subtract(3.0, 1.0);
        let history = calc.history_snapshot();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].operand1(), 1.0);
        assert_eq!(history[1].operation(), Operation::Subtract);
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_apply_matches_calculator(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            let mut calc = Calculator::new();
            for op in Operation::ALL {
                prop_assert_eq!(calc.calculate(op, a, b), op.apply(a, b));
            }
            prop_assert_eq!(calc.history().len(), 4);
        }
    }
}
