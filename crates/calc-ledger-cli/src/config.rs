//! CLI configuration

use calc_ledger::config::FormConfig;

use crate::commands::Cli;
use crate::error::CliResult;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - informational events
    Verbose,
    /// Debug - every recorded entry and rejection
    Debug,
    /// Trace - everything
    Trace,
}

impl Verbosity {
    /// Derives the level from `-q` and the number of `-v` flags
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Filter directive used when `RUST_LOG` is unset
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// CLI configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Settings handed to the calculator form
    pub form: FormConfig,
    /// Print history JSON after `calc` and `run`
    pub json: bool,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set form configuration
    #[must_use]
    pub const fn with_form(mut self, form: FormConfig) -> Self {
        self.form = form;
        self
    }

    /// Set JSON history output
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Builds the configuration from parsed arguments
    ///
    /// The `--config` file is read first; `--locale`, `--strict` and
    /// `--newest-first` then override what it says.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut form = match &cli.config {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading configuration");
                FormConfig::from_file(path)?
            }
            None => FormConfig::default(),
        };
        if let Some(locale) = cli.locale {
            form = form.with_locale(locale.into());
        }
        if cli.strict {
            form = form.with_strict_operands(true);
        }
        if cli.newest_first {
            form = form.with_newest_first(true);
        }

        Ok(Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_form(form)
            .with_json(cli.json))
    }
}
