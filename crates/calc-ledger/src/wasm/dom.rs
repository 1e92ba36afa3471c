//! Mock DOM for the calculator page
//!
//! Lets the form wiring be exercised without a browser. The element ids
//! match the real page: `calculatorForm`, `num1`, `num2`, `operation`,
//! `result` and `history`.

use std::collections::HashMap;

/// Id of the form element
pub const FORM_ID: &str = "calculatorForm";
/// Id of the first operand input
pub const NUM1_ID: &str = "num1";
/// Id of the second operand input
pub const NUM2_ID: &str = "num2";
/// Id of the operation select
pub const OPERATION_ID: &str = "operation";
/// Id of the result display
pub const RESULT_ID: &str = "result";
/// Id of the history list
pub const HISTORY_ID: &str = "history";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Current value for inputs and selects
    pub value: String,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            value: String::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Sets the initial value
    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }
}

/// DOM events the calculator page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Text typed into an input
    Input {
        /// The ID of the input element
        element_id: String,
        /// The new value entered
        value: String,
    },
    /// Option picked in a select
    Change {
        /// The ID of the select element
        element_id: String,
        /// The selected value
        value: String,
    },
    /// Form submission
    Submit {
        /// The ID of the submitted form
        element_id: String,
    },
}

impl DomEvent {
    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a change event
    #[must_use]
    pub fn change(element_id: &str, value: &str) -> Self {
        Self::Change {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a submit event
    #[must_use]
    pub fn submit(element_id: &str) -> Self {
        Self::Submit {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator page without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates a new, empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page structure
    #[must_use]
    pub fn calculator_form() -> Self {
        let mut dom = Self::new();

        let num1 = DomElement::new("input").with_id(NUM1_ID);
        let num2 = DomElement::new("input").with_id(NUM2_ID);

        let mut operation = DomElement::new("select")
            .with_id(OPERATION_ID)
            .with_value("add");
        for op in crate::core::Operation::ALL {
            operation = operation.with_child(
                DomElement::new("option")
                    .with_value(op.name())
                    .with_text(op.name()),
            );
        }

        let form = DomElement::new("form").with_id(FORM_ID);
        let result = DomElement::new("div").with_id(RESULT_ID);
        let history = DomElement::new("ul").with_id(HISTORY_ID);

        dom.register_element(form);
        dom.register_element(num1);
        dom.register_element(num2);
        dom.register_element(operation);
        dom.register_element(result);
        dom.register_element(history);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Dispatches an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        match &event {
            DomEvent::Input { element_id, value } | DomEvent::Change { element_id, value } => {
                if let Some(elem) = self.elements.get_mut(element_id) {
                    elem.value.clone_from(value);
                }
            }
            DomEvent::Submit { .. } => {}
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Gets the current value of an input or select
    #[must_use]
    pub fn get_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.value.as_str())
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Adds a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        let child_id = child.id.clone();
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        if !child_id.is_empty() {
            self.elements.insert(child_id, child);
        }
    }

    /// Gets the text of each child of an element
    #[must_use]
    pub fn child_texts(&self, id: &str) -> Vec<String> {
        self.elements
            .get(id)
            .map(|elem| {
                elem.children
                    .iter()
                    .map(|c| c.text_content.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Clears children of an element
    pub fn clear_children(&mut self, id: &str) {
        let child_ids: Vec<String> = self
            .elements
            .get(id)
            .map(|elem| {
                elem.children
                    .iter()
                    .filter(|c| !c.id.is_empty())
                    .map(|c| c.id.clone())
                    .collect()
            })
            .unwrap_or_default();

        for child_id in child_ids {
            self.elements.remove(&child_id);
        }

        if let Some(elem) = self.elements.get_mut(id) {
            elem.children.clear();
        }
    }
}
