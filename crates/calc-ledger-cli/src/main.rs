//! calc-ledger: two-operand calculator with a running history
//!
//! ## Usage
//!
//! ```bash
//! calc-ledger calc add 2 3            # One calculation
//! calc-ledger --json calc divide 7 0  # Also print the history as JSON
//! calc-ledger run session.txt         # Console commands from a file
//! calc-ledger repl                    # Interactive console
//! ```

use calc_ledger_cli::{
    logging, run_calc, run_repl, run_script, Cli, CliConfig, CliResult, Commands, Verbosity,
};
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Logging first so configuration loading is visible
    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose));
    let config = CliConfig::from_cli(&cli)?;
    tracing::debug!(?config, "configuration resolved");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Commands::Calc(args) => run_calc(&config, args, &mut out),
        Commands::Run(args) => run_script(&config, &args.file, &mut out),
        Commands::Repl => run_repl(&config, io::stdin().lock(), &mut out),
    }
}
