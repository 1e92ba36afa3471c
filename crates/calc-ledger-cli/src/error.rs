//! Error types for the CLI

use std::path::PathBuf;

use calc_ledger::config::ConfigError;
use calc_ledger::input::InputError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A calculation request was rejected
    #[error(transparent)]
    Input(#[from] InputError),

    /// A script line could not be understood
    #[error("{}:{line}: {source}", path.display())]
    Script {
        /// Script file
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// What was wrong with the line
        source: InputError,
    },

    /// History could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a script error
    #[must_use]
    pub fn script(path: impl Into<PathBuf>, line: usize, source: InputError) -> Self {
        Self::Script {
            path: path.into(),
            line,
            source,
        }
    }
}
