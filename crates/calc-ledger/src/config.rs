//! Form configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::Locale;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for `FormConfig`
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read
    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Presentation settings for a calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Language of rendered text
    pub locale: Locale,
    /// Reject operand text that has no numeric value instead of passing NaN on
    pub strict_operands: bool,
    /// Render history newest first
    pub newest_first: bool,
}

impl FormConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set locale
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set strict operand parsing
    #[must_use]
    pub const fn with_strict_operands(mut self, strict: bool) -> Self {
        self.strict_operands = strict;
        self
    }

    /// Set history order
    #[must_use]
    pub const fn with_newest_first(mut self, newest_first: bool) -> Self {
        self.newest_first = newest_first;
        self
    }

    /// Parses configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads configuration from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_config_default() {
        let config = FormConfig::new();
        assert_eq!(config.locale, Locale::English);
        assert!(!config.strict_operands);
        assert!(!config.newest_first);
    }

    #[test]
    fn test_form_config_builders() {
        let config = FormConfig::new()
            .with_locale(Locale::Spanish)
            .with_strict_operands(true)
            .with_newest_first(true);
        assert_eq!(config.locale, Locale::Spanish);
        assert!(config.strict_operands);
        assert!(config.newest_first);
    }

    #[test]
    fn test_form_config_from_json_partial() {
        let config = FormConfig::from_json(r#"{"locale":"spanish"}"#).unwrap();
        assert_eq!(config.locale, Locale::Spanish);
        assert!(!config.strict_operands);
    }

    #[test]
    fn test_form_config_from_json_empty_object() {
        assert_eq!(FormConfig::from_json("{}").unwrap(), FormConfig::default());
    }

    #[test]
    fn test_form_config_rejects_unknown_fields() {
        let err = FormConfig::from_json(r#"{"precision":3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_form_config_from_missing_file() {
        let err = FormConfig::from_file("/nonexistent/calc-ledger.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_form_config_serialize() {
        let json = serde_json::to_string(&FormConfig::new().with_strict_operands(true)).unwrap();
        assert_eq!(
            json,
            r#"{"locale":"english","strict_operands":true,"newest_first":false}"#
        );
    }
}
