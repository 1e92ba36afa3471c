//! calc-ledger CLI library
//!
//! Argument parsing, configuration, logging setup and the runners behind
//! the `calc-ledger` binary.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod runner;

pub use commands::{CalcArgs, Cli, Commands, LocaleArg, RunArgs};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{run_calc, run_repl, run_script, PROMPT};
