//! Line-oriented console front end
//!
//! Each line is one command: `<operation> <a> <b>`, `history`, `json`,
//! `help` or `quit`/`exit`. Blank lines are ignored.

use std::str::FromStr;

use crate::config::FormConfig;
use crate::driver::CalculatorDriver;
use crate::form::{CalculatorForm, Submission};
use crate::input::InputError;

const HELP: &[&str] = &[
    "<operation> <a> <b>   operation is add, subtract, multiply or divide",
    "history               list every operation so far",
    "json                  print the history as JSON",
    "help                  show this help",
    "quit                  leave",
];

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit an operation with two operand texts
    Calculate {
        /// Operation selector, validated by the form
        operation: String,
        /// First operand text
        a: String,
        /// Second operand text
        b: String,
    },
    /// Show the rendered history
    History,
    /// Show the history as JSON
    Json,
    /// Show usage
    Help,
    /// End the session
    Quit,
    /// Nothing to do
    Empty,
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Ok(Self::Empty),
            ["history"] => Ok(Self::History),
            ["json"] => Ok(Self::Json),
            ["help"] => Ok(Self::Help),
            ["quit" | "exit"] => Ok(Self::Quit),
            [operation, a, b] => Ok(Self::Calculate {
                operation: (*operation).to_string(),
                a: (*a).to_string(),
                b: (*b).to_string(),
            }),
            _ => Err(InputError::MalformedCommand(line.trim().to_string())),
        }
    }
}

/// Output of one console command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Lines to print
    pub lines: Vec<String>,
    /// The session should end
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

/// Console driver owning one calculator form for the session
#[derive(Debug, Clone, Default)]
pub struct ConsoleDriver {
    form: CalculatorForm,
}

impl ConsoleDriver {
    /// Creates a console driver with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console driver with the given configuration
    #[must_use]
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            form: CalculatorForm::with_config(config),
        }
    }

    /// Returns a reference to the form controller
    #[must_use]
    pub const fn form(&self) -> &CalculatorForm {
        &self.form
    }

    /// Parses and runs one console line
    pub fn execute(&mut self, line: &str) -> Result<Reply, InputError> {
        let command: Command = line.parse()?;
        Ok(self.run(command))
    }

    /// Runs a parsed command
    pub fn run(&mut self, command: Command) -> Reply {
        match command {
            Command::Calculate { operation, a, b } => {
                self.form.submit(&a, &b, &operation);
                Reply::lines(vec![self.form.result_text().to_string()])
            }
            Command::History => Reply::lines(self.form.history_lines()),
            Command::Json => match self.form.history_json() {
                Ok(json) => Reply::lines(vec![json]),
                Err(err) => Reply::lines(vec![format!("Error: {err}")]),
            },
            Command::Help => Reply::lines(HELP.iter().map(|s| (*s).to_string()).collect()),
            Command::Quit => Reply {
                lines: Vec::new(),
                quit: true,
            },
            Command::Empty => Reply::default(),
        }
    }
}

impl CalculatorDriver for ConsoleDriver {
    fn submit(&mut self, operation: &str, a: &str, b: &str) -> Submission {
        self.form.submit(a, b, operation)
    }

    fn result_text(&self) -> String {
        self.form.result_text().to_string()
    }

    fn history_lines(&self) -> Vec<String> {
        self.form.history_lines()
    }
}
