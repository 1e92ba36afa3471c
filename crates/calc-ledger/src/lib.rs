//! calc-ledger - two-operand calculator with an append-only history
//!
//! A [`Calculator`](core::Calculator) performs one of four binary
//! operations and records every call, including a division by zero, in its
//! [`History`](core::History). Front ends (the browser page, the console)
//! sit on a [`CalculatorForm`](form::CalculatorForm), which takes raw field
//! text, validates the operation selector and renders the result.
//!
//! # Example
//!
//! ```rust
//! use calc_ledger::prelude::*;
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.add(2.0, 3.0), 5.0);
//! assert_eq!(calc.divide(7.0, 0.0), Err(CalcError::DivisionByZero));
//!
//! let history = calc.history();
//! assert_eq!(history.len(), 2);
//! assert_eq!(history.last().unwrap().result(), Outcome::DivisionByZero);
//!
//! // From the form side, text in and text out
//! let mut form = CalculatorForm::new();
//! form.submit("10", "4", "subtract");
//! assert_eq!(form.result_text(), "The result is: 6");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod console;
pub mod core;
pub mod driver;
pub mod form;
pub mod input;
pub mod render;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, FormConfig};
    pub use crate::console::{Command, ConsoleDriver, Reply};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, History, HistoryEntry, Operation, Outcome,
        SharedCalculator,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::form::{CalculatorForm, Submission};
    pub use crate::input::{parse_operand, parse_operation, InputError};
    pub use crate::render::{format_number, Locale};
    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}
