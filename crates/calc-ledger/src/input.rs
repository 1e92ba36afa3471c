//! Boundary parsing: operand text and operation selectors
//!
//! Operand text is read the way a browser's `parseFloat` reads it, so
//! anything without a numeric prefix becomes NaN instead of an error.

use thiserror::Error;

use crate::core::Operation;

/// Errors raised before a request reaches the calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The operation selector is not one of the four known names
    #[error("Invalid operation")]
    UnknownOperation(String),

    /// Operand text has no numeric value (strict mode only)
    #[error("Invalid number in {field}: {text:?}")]
    InvalidOperand {
        /// Which field held the text
        field: String,
        /// The rejected text
        text: String,
    },

    /// A console line that does not match any command
    #[error("Unrecognized command: {0}")]
    MalformedCommand(String),

    /// A page element the form expects is missing
    #[error("Missing element: #{0}")]
    MissingElement(String),
}

impl InputError {
    /// Create an invalid operand error
    #[must_use]
    pub fn invalid_operand(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InvalidOperand {
            field: field.into(),
            text: text.into(),
        }
    }
}

/// Parses an operation selector
pub fn parse_operation(text: &str) -> Result<Operation, InputError> {
    text.parse()
}

/// Parses operand text with `parseFloat` semantics
///
/// Leading whitespace is skipped, the longest numeric prefix is used and
/// trailing text is ignored. `Infinity` (optionally signed) is recognized.
/// Text without a numeric prefix yields NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when followed by at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
