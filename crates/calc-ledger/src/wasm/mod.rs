//! WASM front end for the calculator page
//!
//! The mock DOM and driver are always available so the page wiring is
//! testable natively; the real browser bindings need the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::{start, BrowserCalculator};
pub use dom::{
    DomElement, DomEvent, MockDom, FORM_ID, HISTORY_ID, NUM1_ID, NUM2_ID, OPERATION_ID, RESULT_ID,
};
pub use driver::WasmDriver;
