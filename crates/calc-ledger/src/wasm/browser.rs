//! Browser WASM bindings for the calculator page
//!
//! `start` wires the page's form submit event to a [`CalculatorForm`];
//! `BrowserCalculator` exposes the same controller to scripts.

// Compiled only with the `wasm` feature (see mod.rs).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, HtmlInputElement, HtmlSelectElement};

use super::dom::{FORM_ID, HISTORY_ID, NUM1_ID, NUM2_ID, OPERATION_ID, RESULT_ID};
use crate::config::FormConfig;
use crate::form::CalculatorForm;
use crate::input::InputError;

/// Browser Calculator - scripted entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    form: CalculatorForm,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator, optionally from a JSON configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => {
                FormConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => FormConfig::default(),
        };
        Ok(Self {
            form: CalculatorForm::with_config(config),
        })
    }

    /// Submit two operand texts and an operation selector; returns the result text
    pub fn submit(&mut self, num1: &str, num2: &str, operation: &str) -> String {
        self.form.submit(num1, num2, operation);
        self.form.result_text().to_string()
    }

    /// Get the last result text
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> String {
        self.form.result_text().to_string()
    }

    /// Get history count
    pub fn history_count(&self) -> usize {
        self.form.calculator().history().len()
    }

    /// Get a rendered history line
    pub fn history_entry(&self, index: usize) -> Option<String> {
        self.form.history_lines().get(index).cloned()
    }

    /// Get history as JSON
    pub fn history_json(&self) -> Result<String, JsValue> {
        self.form
            .history_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Attach the calculator to the page's form
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = document()?;
    let form_element = element(&document, FORM_ID)?;
    let state = Rc::new(RefCell::new(CalculatorForm::new()));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Err(err) = handle_submit(&state) {
            console::error_1(&err);
        }
    });
    form_element.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    on_submit.forget();

    console::log_1(&"Calculator WASM initialized".into());
    Ok(())
}

fn handle_submit(state: &Rc<RefCell<CalculatorForm>>) -> Result<(), JsValue> {
    let document = document()?;
    let num1 = element(&document, NUM1_ID)?
        .dyn_into::<HtmlInputElement>()?
        .value();
    let num2 = element(&document, NUM2_ID)?
        .dyn_into::<HtmlInputElement>()?
        .value();
    let operation = element(&document, OPERATION_ID)?
        .dyn_into::<HtmlSelectElement>()?
        .value();

    let mut form = state.borrow_mut();
    form.submit(&num1, &num2, &operation);

    element(&document, RESULT_ID)?.set_text_content(Some(form.result_text()));

    let history = element(&document, HISTORY_ID)?;
    history.set_inner_html("");
    for line in form.history_lines() {
        let item = document.create_element("li")?;
        item.set_text_content(Some(&line));
        history.append_child(&item)?;
    }
    Ok(())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn element(document: &Document, id: &str) -> Result<web_sys::Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&InputError::MissingElement(id.to_string()).to_string()))
}
