//! Human-readable text for results and history lines

use serde::{Deserialize, Serialize};

use crate::core::{HistoryEntry, Outcome};

/// Language used for rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default)
    #[default]
    English,
    /// Spanish
    Spanish,
}

impl Locale {
    /// Prefix placed before a numeric result
    #[must_use]
    pub const fn result_prefix(self) -> &'static str {
        match self {
            Self::English => "The result is: ",
            Self::Spanish => "El resultado es: ",
        }
    }

    /// Text shown for the division-by-zero marker
    #[must_use]
    pub const fn division_by_zero(self) -> &'static str {
        match self {
            Self::English => "Error: Division by zero",
            Self::Spanish => "Error: División por cero",
        }
    }

    /// Text shown when the operation selector is not recognized
    #[must_use]
    pub const fn invalid_operation(self) -> &'static str {
        match self {
            Self::English => "Invalid operation",
            Self::Spanish => "Operación no válida",
        }
    }

    /// Renders the result of one submission
    #[must_use]
    pub fn result_text(self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Value(v) => format!("{}{}", self.result_prefix(), format_number(v)),
            Outcome::DivisionByZero => self.division_by_zero().to_string(),
        }
    }

    /// Renders one history line with the operation, both operands and the result
    #[must_use]
    pub fn history_line(self, entry: &HistoryEntry) -> String {
        let a = format_number(entry.operand1());
        let b = format_number(entry.operand2());
        let result = match entry.result() {
            Outcome::Value(v) => format_number(v),
            Outcome::DivisionByZero => self.division_by_zero().to_string(),
        };
        let op = entry.operation().name();
        match self {
            Self::English => format!("Operation: {op}, Numbers: {a} and {b}, Result: {result}"),
            Self::Spanish => format!("Operación: {op}, Números: {a} y {b}, Resultado: {result}"),
        }
    }
}

/// Formats a number for display
///
/// Follows the browser's number-to-string rules: integral values print
/// without a fractional part, NaN prints as `NaN`, infinities as
/// `Infinity`/`-Infinity`, and negative zero as `0`. Magnitudes of at least
/// `1e21` or below `1e-6` use exponent form with a signed exponent, such as
/// `1e+21` or `1.5e-7`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // `{:e}` gives the shortest round-trip mantissa but an unsigned exponent
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    // ===== format_number tests =====

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e22), "-1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
        assert_eq!(format_number(f64::MIN_POSITIVE), "2.2250738585072014e-308");
    }

    #[test]
    fn test_format_number_exponent_thresholds() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(123_456.789), "123456.789");
    }

    // ===== Locale tests =====

    #[test]
    fn test_locale_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn test_result_text_value() {
        assert_eq!(
            Locale::English.result_text(Outcome::Value(5.0)),
            "The result is: 5"
        );
        assert_eq!(
            Locale::Spanish.result_text(Outcome::Value(2.5)),
            "El resultado es: 2.5"
        );
    }

    #[test]
    fn test_result_text_division_by_zero() {
        assert_eq!(
            Locale::English.result_text(Outcome::DivisionByZero),
            "Error: Division by zero"
        );
        assert_eq!(
            Locale::Spanish.result_text(Outcome::DivisionByZero),
            "Error: División por cero"
        );
    }

    #[test]
    fn test_result_text_nan() {
        assert_eq!(
            Locale::English.result_text(Outcome::Value(f64::NAN)),
            "The result is: NaN"
        );
    }

    #[test]
    fn test_result_text_extreme_magnitudes() {
        assert_eq!(
            Locale::English.result_text(Outcome::Value(1e300 * 1e10)),
            "The result is: Infinity"
        );
        assert_eq!(
            Locale::English.result_text(Outcome::Value(2e25)),
            "The result is: 2e+25"
        );
    }

    #[test]
    fn test_invalid_operation_text() {
        assert_eq!(Locale::English.invalid_operation(), "Invalid operation");
        assert_eq!(Locale::Spanish.invalid_operation(), "Operación no válida");
    }

    #[test]
    fn test_history_line() {
        let entry = HistoryEntry::new(2.0, 3.0, Operation::Add, Outcome::Value(5.0));
        assert_eq!(
            Locale::English.history_line(&entry),
            "Operation: add, Numbers: 2 and 3, Result: 5"
        );
        assert_eq!(
            Locale::Spanish.history_line(&entry),
            "Operación: add, Números: 2 y 3, Resultado: 5"
        );
    }

    #[test]
    fn test_history_line_division_by_zero() {
        let entry = HistoryEntry::new(7.0, 0.0, Operation::Divide, Outcome::DivisionByZero);
        assert_eq!(
            Locale::English.history_line(&entry),
            "Operation: divide, Numbers: 7 and 0, Result: Error: Division by zero"
        );
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::Spanish).unwrap();
        assert_eq!(json, r#""spanish""#);
    }
}
