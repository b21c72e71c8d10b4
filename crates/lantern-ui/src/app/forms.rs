//! Floating labels and blur-time field validation.

use super::UiController;
use crate::app::dom;
use crate::core::error::UiError;
use crate::core::validation::{FieldKind, FieldState, label_floats, validate};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Node};

const CONTROL_SELECTOR: &str = ".form-input, .form-select, .form-textarea";
const LABEL_SELECTOR: &str = ".form-label";
const GROUP_SELECTOR: &str = ".form-group";
const MESSAGE_SELECTOR: &str = ".form-error-message";
const FLOATING_CLASS: &str = "floating";
const ERROR_CLASS: &str = "form-error";
const SUCCESS_CLASS: &str = "form-success";

/// Form control variants that expose a value and a `required` flag.
enum FieldControl {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldControl {
    fn from_element(element: &Element) -> Option<Self> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(Self::Input(input.clone()));
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Some(Self::Select(select.clone()));
        }
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| Self::TextArea(area.clone()))
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::Select(select) => select.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    fn required(&self) -> bool {
        match self {
            Self::Input(input) => input.required(),
            Self::Select(select) => select.required(),
            Self::TextArea(area) => area.required(),
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::Input(input) => FieldKind::from_input_type(&input.type_()),
            Self::Select(_) | Self::TextArea(_) => FieldKind::Other,
        }
    }
}

impl UiController {
    pub(super) fn bind_forms(self: &Rc<Self>) {
        for element in dom::query_all(&self.document, CONTROL_SELECTOR) {
            if FieldControl::from_element(&element).is_none() {
                continue;
            }
            self.bind_floating_label(&element);

            let control = element.clone();
            self.on(&element, "blur", move |controller, _event| {
                dom::log_result(validate_field(&controller.document, &control));
            });
            let control = element.clone();
            self.on(&element, "input", move |controller, _event| {
                dom::log_result(apply_field_state(
                    &controller.document,
                    &control,
                    &FieldState::Untouched,
                ));
            });
        }
    }

    fn bind_floating_label(self: &Rc<Self>, element: &Element) {
        let Some(label) = element
            .parent_element()
            .and_then(|parent| dom::query_in(&parent, LABEL_SELECTOR))
        else {
            return;
        };
        for event_type in ["focus", "blur", "input"] {
            let control = element.clone();
            let label = label.clone();
            self.on(element, event_type, move |controller, _event| {
                refresh_label(&controller.document, &control, &label);
            });
        }
        refresh_label(&self.document, element, &label);
    }
}

fn refresh_label(document: &Document, element: &Element, label: &Element) {
    let Some(control) = FieldControl::from_element(element) else {
        return;
    };
    let node: &Node = element;
    let focused = document
        .active_element()
        .is_some_and(|active| active.is_same_node(Some(node)));
    let floats = label_floats(&control.value(), focused);
    dom::log_result(dom::set_class(label, FLOATING_CLASS, floats));
}

fn validate_field(document: &Document, element: &Element) -> Result<(), UiError> {
    let Some(control) = FieldControl::from_element(element) else {
        return Ok(());
    };
    let state = validate(control.kind(), control.required(), &control.value());
    apply_field_state(document, element, &state)
}

/// Replace any prior validation styling with `state`.
fn apply_field_state(
    document: &Document,
    element: &Element,
    state: &FieldState,
) -> Result<(), UiError> {
    let group = dom::closest(element, GROUP_SELECTOR);
    dom::remove_class(element, ERROR_CLASS)?;
    dom::remove_class(element, SUCCESS_CLASS)?;
    if let Some(group) = &group {
        for message in dom::query_all_in(group, MESSAGE_SELECTOR) {
            message.remove();
        }
    }

    match *state {
        FieldState::Invalid(message) => {
            dom::add_class(element, ERROR_CLASS)?;
            if let Some(group) = group.filter(|_| !message.is_empty()) {
                let note = document
                    .create_element("div")
                    .map_err(|err| UiError::js("createElement", err))?;
                note.set_class_name("form-error-message");
                note.set_text_content(Some(message));
                group
                    .append_child(&note)
                    .map_err(|err| UiError::js("appendChild", err))?;
            }
        }
        FieldState::Valid => {
            let value = FieldControl::from_element(element)
                .map(|control| control.value())
                .unwrap_or_default();
            if state.shows_success(&value) {
                dom::add_class(element, SUCCESS_CLASS)?;
            }
        }
        FieldState::Untouched => {}
    }
    Ok(())
}
