//! CLI command definitions using clap

use calc_ledger::render::Locale;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// calc-ledger: two-operand calculator that keeps a history of every operation
#[derive(Parser, Debug)]
#[command(name = "calc-ledger")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Language of result and history text
    #[arg(long, value_enum, global = true)]
    pub locale: Option<LocaleArg>,

    /// Reject operands that are not numbers instead of computing NaN
    #[arg(long, global = true)]
    pub strict: bool,

    /// List history newest entry first
    #[arg(long, global = true)]
    pub newest_first: bool,

    /// Print the history as JSON when done
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Perform one calculation
    Calc(CalcArgs),

    /// Run console commands from a file
    Run(RunArgs),

    /// Interactive console
    Repl,
}

/// Arguments for the calc command
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct CalcArgs {
    /// Operation: add, subtract, multiply or divide
    pub operation: String,

    /// First operand
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Second operand
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Script with one console command per line
    pub file: PathBuf,
}

/// Locale argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocaleArg {
    /// English text
    #[default]
    English,
    /// Spanish text
    Spanish,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::English => Self::English,
            LocaleArg::Spanish => Self::Spanish,
        }
    }
}
