//! WASM Driver - the calculator page against a mock DOM
//!
//! Reproduces the page wiring: fields are read from the DOM on submit, the
//! result text is written to `#result` and `#history` is rebuilt with one
//! `<li>` per entry.

use super::dom::{
    DomElement, DomEvent, MockDom, FORM_ID, HISTORY_ID, NUM1_ID, NUM2_ID, OPERATION_ID, RESULT_ID,
};
use crate::config::FormConfig;
use crate::driver::CalculatorDriver;
use crate::form::{CalculatorForm, Submission};
use crate::input::InputError;

/// WASM Driver wrapping a calculator form and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    form: CalculatorForm,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Creates a WASM driver with the given form configuration
    #[must_use]
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            form: CalculatorForm::with_config(config),
            dom: MockDom::calculator_form(),
        }
    }

    /// Creates a WASM driver with existing form and DOM
    #[must_use]
    pub fn with_form_and_dom(form: CalculatorForm, dom: MockDom) -> Self {
        Self { form, dom }
    }

    /// Returns a reference to the form controller
    #[must_use]
    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Simulates typing into both operand fields and picking an operation
    pub fn fill(&mut self, num1: &str, num2: &str, operation: &str) {
        self.dom.dispatch_event(DomEvent::input(NUM1_ID, num1));
        self.dom.dispatch_event(DomEvent::input(NUM2_ID, num2));
        self.dom
            .dispatch_event(DomEvent::change(OPERATION_ID, operation));
    }

    /// Simulates submitting the form
    pub fn submit_form(&mut self) -> Submission {
        self.dom.dispatch_event(DomEvent::submit(FORM_ID));
        let submission = match self.read_fields() {
            Ok((num1, num2, operation)) => self.form.submit(&num1, &num2, &operation),
            Err(err) => Submission::Rejected(err),
        };
        self.sync_dom();
        submission
    }

    fn read_fields(&self) -> Result<(String, String, String), InputError> {
        let read = |id: &str| {
            self.dom
                .get_value(id)
                .map(str::to_string)
                .ok_or_else(|| InputError::MissingElement(id.to_string()))
        };
        Ok((read(NUM1_ID)?, read(NUM2_ID)?, read(OPERATION_ID)?))
    }

    /// Synchronizes DOM state with the form state
    fn sync_dom(&mut self) {
        self.dom
            .set_element_text(RESULT_ID, self.form.result_text());

        self.dom.clear_children(HISTORY_ID);
        for (i, line) in self.form.history_lines().iter().enumerate() {
            let item = DomElement::new("li")
                .with_id(&format!("history-{i}"))
                .with_text(line);
            self.dom.append_child(HISTORY_ID, item);
        }
    }

    /// Gets the result element's text
    #[must_use]
    pub fn result_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(RESULT_ID)
    }

    /// Gets history list items
    #[must_use]
    pub fn history_list_items(&self) -> Vec<String> {
        self.dom.child_texts(HISTORY_ID)
    }
}

impl CalculatorDriver for WasmDriver {
    fn submit(&mut self, operation: &str, a: &str, b: &str) -> Submission {
        self.fill(a, b, operation);
        self.submit_form()
    }

    fn result_text(&self) -> String {
        self.result_element_text().unwrap_or_default().to_string()
    }

    fn history_lines(&self) -> Vec<String> {
        self.history_list_items()
    }
}
