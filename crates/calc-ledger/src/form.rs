//! Calculator form controller
//!
//! Takes raw field text the way a page form submits it, validates the
//! selector, parses operands, calls the calculator and keeps the rendered
//! result text. Shared by the browser page and the console front end.

use crate::config::FormConfig;
use crate::core::{Calculator, Operation, Outcome};
use crate::input::{parse_operand, InputError};

/// Outcome of one form submission
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The request reached the calculator and was recorded
    Computed {
        /// Operation performed
        operation: Operation,
        /// Its result
        outcome: Outcome,
    },
    /// The request was rejected at the boundary; nothing was recorded
    Rejected(InputError),
}

impl Submission {
    /// Returns the outcome if the submission was computed
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Computed { outcome, .. } => Some(*outcome),
            Self::Rejected(_) => None,
        }
    }

    /// Returns true if the submission was rejected
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Form controller owning one calculator for the session
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    calculator: Calculator,
    config: FormConfig,
    result_text: String,
}

impl CalculatorForm {
    /// Creates a form with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form with the given configuration
    #[must_use]
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            config,
            result_text: String::new(),
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The underlying calculator
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Handles one submission of the two operand fields and the selector
    pub fn submit(&mut self, num1: &str, num2: &str, operation: &str) -> Submission {
        let locale = self.config.locale;

        let op = match operation.parse::<Operation>() {
            Ok(op) => op,
            Err(err) => {
                tracing::debug!(selector = operation, "rejected unknown operation");
                self.result_text = locale.invalid_operation().to_string();
                return Submission::Rejected(err);
            }
        };

        let a = parse_operand(num1);
        let b = parse_operand(num2);
        if self.config.strict_operands {
            let invalid = [("num1", num1, a), ("num2", num2, b)]
                .into_iter()
                .find(|(_, _, value)| value.is_nan());
            if let Some((field, text, _)) = invalid {
                let err = InputError::invalid_operand(field, text);
                tracing::debug!(field, text, "rejected non-numeric operand");
                self.result_text = err.to_string();
                return Submission::Rejected(err);
            }
        }

        let outcome = self.calculator.calculate(op, a, b);
        self.result_text = locale.result_text(outcome);
        Submission::Computed {
            operation: op,
            outcome,
        }
    }

    /// Text of the last submission's result, empty before the first one
    #[must_use]
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// One rendered line per history entry, in the configured order
    #[must_use]
    pub fn history_lines(&self) -> Vec<String> {
        let locale = self.config.locale;
        let history = self.calculator.history();
        if self.config.newest_first {
            history.iter_rev().map(|e| locale.history_line(e)).collect()
        } else {
            history.iter().map(|e| locale.history_line(e)).collect()
        }
    }

    /// History serialized as JSON
    pub fn history_json(&self) -> Result<String, serde_json::Error> {
        self.calculator.history().to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Locale;

    // ===== Constructor tests =====

    #[test]
    fn test_form_new() {
        let form = CalculatorForm::new();
        assert!(form.result_text().is_empty());
        assert!(form.history_lines().is_empty());
        assert_eq!(*form.config(), FormConfig::default());
    }

    // ===== Submission tests =====

    #[test]
    fn test_submit_add() {
        let mut form = CalculatorForm::new();
        let submission = form.submit("2", "3", "add");
        assert_eq!(
            submission,
            Submission::Computed {
                operation: Operation::Add,
                outcome: Outcome::Value(5.0)
            }
        );
        assert_eq!(form.result_text(), "The result is: 5");
        assert_eq!(
            form.history_lines(),
            vec!["Operation: add, Numbers: 2 and 3, Result: 5"]
        );
    }

    #[test]
    fn test_submit_divide_by_zero() {
        let mut form = CalculatorForm::new();
        let submission = form.submit("7", "0", "divide");
        assert_eq!(submission.outcome(), Some(Outcome::DivisionByZero));
        assert_eq!(form.result_text(), "Error: Division by zero");
        assert_eq!(form.calculator().history().len(), 1);
    }

    #[test]
    fn test_submit_unknown_operation_records_nothing() {
        let mut form = CalculatorForm::new();
        let submission = form.submit("1", "2", "power");
        assert!(submission.is_rejected());
        assert_eq!(submission.outcome(), None);
        assert_eq!(form.result_text(), "Invalid operation");
        assert!(form.calculator().history().is_empty());
    }

    #[test]
    fn test_submit_non_numeric_passes_nan_through() {
        let mut form = CalculatorForm::new();
        let submission = form.submit("abc", "1", "add");
        assert!(submission.outcome().unwrap().value().unwrap().is_nan());
        assert_eq!(form.result_text(), "The result is: NaN");
        assert_eq!(
            form.history_lines(),
            vec!["Operation: add, Numbers: NaN and 1, Result: NaN"]
        );
    }

    #[test]
    fn test_submit_strict_rejects_non_numeric() {
        let mut form = CalculatorForm::with_config(FormConfig::new().with_strict_operands(true));
        let submission = form.submit("4", "x", "multiply");
        assert_eq!(
            submission,
            Submission::Rejected(InputError::invalid_operand("num2", "x"))
        );
        assert!(form.calculator().history().is_empty());
        assert!(form.result_text().contains("num2"));
    }

    #[test]
    fn test_submit_strict_accepts_numbers() {
        let mut form = CalculatorForm::with_config(FormConfig::new().with_strict_operands(true));
        assert!(!form.submit("4", "2", "divide").is_rejected());
        assert_eq!(form.result_text(), "The result is: 2");
    }

    #[test]
    fn test_rejection_keeps_previous_history() {
        let mut form = CalculatorForm::new();
        form.submit("1", "1", "add");
        form.submit("1", "1", "sqrt");
        assert_eq!(form.history_lines().len(), 1);
        assert_eq!(form.result_text(), "Invalid operation");
    }

    // ===== Rendering tests =====

    #[test]
    fn test_spanish_locale() {
        let mut form = CalculatorForm::with_config(FormConfig::new().with_locale(Locale::Spanish));
        form.submit("10", "0", "divide");
        assert_eq!(form.result_text(), "Error: División por cero");
        form.submit("1", "1", "nope");
        assert_eq!(form.result_text(), "Operación no válida");
        assert_eq!(
            form.history_lines(),
            vec!["Operación: divide, Números: 10 y 0, Resultado: Error: División por cero"]
        );
    }

    #[test]
    fn test_history_lines_newest_first() {
        let mut form = CalculatorForm::with_config(FormConfig::new().with_newest_first(true));
        form.submit("1", "1", "add");
        form.submit("2", "2", "multiply");
        let lines = form.history_lines();
        assert!(lines[0].starts_with("Operation: multiply"));
        assert!(lines[1].starts_with("Operation: add"));
    }

    #[test]
    fn test_history_json() {
        let mut form = CalculatorForm::new();
        form.submit("6", "3", "subtract");
        let json = form.history_json().unwrap();
        assert!(json.contains(r#""operation":"subtract""#));
        assert!(json.contains(r#""result":{"value":3.0}"#));
    }
}
