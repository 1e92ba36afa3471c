//! Front-end driver abstraction
//!
//! Every front end (mock browser page, console) implements
//! [`CalculatorDriver`], so one set of verification functions checks them
//! all.

use crate::core::Outcome;
use crate::form::Submission;
use crate::input::InputError;

/// Abstract driver trait for calculator front ends
pub trait CalculatorDriver {
    /// Submits two operand texts and an operation selector
    fn submit(&mut self, operation: &str, a: &str, b: &str) -> Submission;

    /// Gets the text currently shown as the result
    fn result_text(&self) -> String;

    /// Gets the rendered history lines, in display order
    fn history_lines(&self) -> Vec<String>;
}

// ===== Shared verification functions =====
// These run against ANY CalculatorDriver implementation with the default
// configuration (English, NaN pass-through, oldest first).

/// Verifies the four operations and their rendered results
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("add", "2", "3", "5"),
        ("subtract", "5", "7", "-2"),
        ("multiply", "4", "0", "0"),
        ("divide", "10", "2", "5"),
        ("divide", "7", "2", "3.5"),
    ];
    for (op, a, b, expected) in cases {
        let submission = driver.submit(op, a, b);
        assert!(!submission.is_rejected(), "{op} {a} {b} was rejected");
        assert_eq!(driver.result_text(), format!("The result is: {expected}"));
    }
}

/// Verifies that a zero divisor yields the marker and is still recorded
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.history_lines().len();
    let submission = driver.submit("divide", "7", "0");
    assert_eq!(submission.outcome(), Some(Outcome::DivisionByZero));
    assert_eq!(driver.result_text(), "Error: Division by zero");

    let lines = driver.history_lines();
    assert_eq!(lines.len(), before + 1);
    assert_eq!(
        lines[lines.len() - 1],
        "Operation: divide, Numbers: 7 and 0, Result: Error: Division by zero"
    );
}

/// Verifies that an unknown selector is rejected without a history entry
pub fn verify_invalid_operation<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.history_lines().len();
    let submission = driver.submit("power", "2", "3");
    assert!(matches!(
        submission,
        Submission::Rejected(InputError::UnknownOperation(_))
    ));
    assert_eq!(driver.result_text(), "Invalid operation");
    assert_eq!(driver.history_lines().len(), before);
}

/// Verifies that history lines appear in call order
pub fn verify_history_order<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.history_lines().len();
    driver.submit("add", "1", "1");
    driver.submit("divide", "1", "0");
    driver.submit("multiply", "2", "2");

    let lines = driver.history_lines();
    assert_eq!(lines.len(), before + 3);
    assert_eq!(
        &lines[before..],
        &[
            "Operation: add, Numbers: 1 and 1, Result: 2".to_string(),
            "Operation: divide, Numbers: 1 and 0, Result: Error: Division by zero".to_string(),
            "Operation: multiply, Numbers: 2 and 2, Result: 4".to_string(),
        ]
    );
}

/// Verifies that non-numeric text flows through as NaN
pub fn verify_nan_passthrough<D: CalculatorDriver>(driver: &mut D) {
    let submission = driver.submit("add", "abc", "1");
    let value = submission.outcome().and_then(Outcome::value);
    assert!(value.is_some_and(f64::is_nan));
    assert_eq!(driver.result_text(), "The result is: NaN");
}

/// Runs every shared check in sequence
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_invalid_operation(driver);
    verify_history_order(driver);
    verify_nan_passthrough(driver);
}
