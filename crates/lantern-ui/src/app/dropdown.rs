//! Dropdown toggling, outside-click dismissal, and Escape focus return.

use super::UiController;
use crate::app::dom;
use crate::core::logic::{
    DropdownHit, DropdownOutcome, ShortcutOutcome, dropdown_click, interpret_shortcut,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

const DROPDOWN_SELECTOR: &str = ".dropdown";
const TOGGLE_SELECTOR: &str = ".dropdown-toggle";
const OPEN_SELECTOR: &str = ".dropdown.show";
const SHOW_CLASS: &str = "show";

impl UiController {
    pub(super) fn bind_dropdowns(self: &Rc<Self>) {
        let document = self.document.clone();
        self.on(&document, "click", on_dropdown_click);
        self.on(&document, "keydown", on_dropdown_keydown);
    }

    fn close_all_dropdowns(&self) {
        for dropdown in dom::query_all(&self.document, OPEN_SELECTOR) {
            dom::log_result(dom::remove_class(&dropdown, SHOW_CLASS));
        }
    }
}

fn on_dropdown_click(controller: &Rc<UiController>, event: &Event) {
    let Some(target) = dom::event_element(event) else {
        return;
    };
    let owner = dom::closest(&target, DROPDOWN_SELECTOR);
    let hit = DropdownHit {
        inside_dropdown: owner.is_some(),
        on_toggle: dom::closest(&target, TOGGLE_SELECTOR).is_some(),
    };
    match (dropdown_click(hit), owner) {
        (DropdownOutcome::CloseAll, _) => controller.close_all_dropdowns(),
        (DropdownOutcome::Toggle, Some(dropdown)) => {
            dom::log_result(dom::toggle_class(&dropdown, SHOW_CLASS));
        }
        _ => {}
    }
}

fn on_dropdown_keydown(controller: &Rc<UiController>, event: &Event) {
    let Some(open) = dom::query(&controller.document, OPEN_SELECTOR) else {
        return;
    };
    let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    if interpret_shortcut(&key.key(), key.ctrl_key()) != Some(ShortcutOutcome::Dismiss) {
        return;
    }
    dom::log_result(dom::remove_class(&open, SHOW_CLASS));
    if let Some(toggle) = dom::query_in(&open, TOGGLE_SELECTOR) {
        dom::log_result(dom::focus(&toggle));
    }
}
