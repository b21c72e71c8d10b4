//! Tooltip hover hooks. Rendering is owned by the stylesheet; the hooks only
//! announce hover changes as bubbling custom events.

use super::UiController;
use crate::app::dom;
use crate::core::error::UiError;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Element, Event};

const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
const TOOLTIP_ATTR: &str = "data-tooltip";
const SHOW_EVENT: &str = "lantern:tooltip-show";
const HIDE_EVENT: &str = "lantern:tooltip-hide";

impl UiController {
    pub(super) fn bind_tooltips(self: &Rc<Self>) {
        for element in dom::query_all(&self.document, TOOLTIP_SELECTOR) {
            self.on(&element, "mouseenter", show_tooltip);
            self.on(&element, "mouseleave", hide_tooltip);
        }
    }
}

fn show_tooltip(_controller: &Rc<UiController>, event: &Event) {
    if let Some(element) = dom::event_element(event) {
        dom::log_result(announce(&element, SHOW_EVENT));
    }
}

fn hide_tooltip(_controller: &Rc<UiController>, event: &Event) {
    if let Some(element) = dom::event_element(event) {
        dom::log_result(announce(&element, HIDE_EVENT));
    }
}

fn announce(element: &Element, name: &str) -> Result<(), UiError> {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    let text = element.get_attribute(TOOLTIP_ATTR).unwrap_or_default();
    init.set_detail(&JsValue::from_str(&text));
    let event = CustomEvent::new_with_event_init_dict(name, &init)
        .map_err(|err| UiError::js("CustomEvent", err))?;
    element
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(|err| UiError::js("dispatchEvent", err))
}
