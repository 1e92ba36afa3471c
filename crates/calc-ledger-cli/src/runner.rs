//! Command runners
//!
//! Each runner owns one calculator session for its whole run and writes
//! calculator output to the given writer.

use std::io::{BufRead, Write};
use std::path::Path;

use calc_ledger::console::ConsoleDriver;
use calc_ledger::form::{CalculatorForm, Submission};

use crate::commands::CalcArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Prompt shown by the interactive console
pub const PROMPT: &str = "calc> ";

/// Performs one calculation and prints the result line and the history
///
/// A rejected request (unknown operation, or a non-numeric operand in
/// strict mode) is an error; a division by zero is a normal result.
pub fn run_calc<W: Write>(config: &CliConfig, args: &CalcArgs, out: &mut W) -> CliResult<()> {
    let mut form = CalculatorForm::with_config(config.form);
    if let Submission::Rejected(err) = form.submit(&args.a, &args.b, &args.operation) {
        return Err(err.into());
    }

    writeln!(out, "{}", form.result_text())?;
    for line in form.history_lines() {
        writeln!(out, "{line}")?;
    }
    if config.json {
        writeln!(out, "{}", form.history_json()?)?;
    }
    Ok(())
}

/// Runs console commands from a script file
///
/// Lines starting with `#` are comments. A line that is not a console
/// command stops the script with its line number.
pub fn run_script<W: Write>(config: &CliConfig, path: &Path, out: &mut W) -> CliResult<()> {
    let script = std::fs::read_to_string(path)?;
    let mut console = ConsoleDriver::with_config(config.form);
    tracing::info!(path = %path.display(), "running script");

    for (index, line) in script.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        let reply = console
            .execute(line)
            .map_err(|err| CliError::script(path, index + 1, err))?;
        for text in &reply.lines {
            writeln!(out, "{text}")?;
        }
        if reply.quit {
            break;
        }
    }

    if config.json {
        writeln!(out, "{}", console.form().history_json()?)?;
    }
    Ok(())
}

/// Interactive console over any reader and writer
///
/// Ends on `quit`, `exit` or end of input. Malformed lines are reported
/// and the session continues.
pub fn run_repl<R: BufRead, W: Write>(config: &CliConfig, input: R, out: &mut W) -> CliResult<()> {
    let mut console = ConsoleDriver::with_config(config.form);
    if !config.verbosity.is_quiet() {
        writeln!(out, "calc-ledger console. Type 'help' for commands.")?;
    }

    write!(out, "{PROMPT}")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        match console.execute(&line) {
            Ok(reply) => {
                for text in &reply.lines {
                    writeln!(out, "{text}")?;
                }
                if reply.quit {
                    return Ok(());
                }
            }
            Err(err) => {
                tracing::warn!(%err, "ignored console line");
                writeln!(out, "Error: {err}")?;
            }
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
