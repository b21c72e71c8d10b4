//! Modal open/close, delegated toggles, and Escape handling.

use super::UiController;
use crate::app::dom;
use crate::core::logic::{
    FOCUSABLE_SELECTOR, ModalTransition, ShortcutOutcome, hide_still_due, interpret_shortcut,
};
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

const SHOW_CLASS: &str = "show";
const TOGGLE_ATTR: &str = "data-modal-toggle";
const TOGGLE_SELECTOR: &str = "[data-modal-toggle]";
const DISMISS_SELECTOR: &str = ".modal-backdrop, .modal-close";
const SHOWN_SELECTOR: &str = ".modal.show";

impl UiController {
    /// Open the modal with `id` when closed, close it when shown.
    pub(crate) fn toggle_modal(&self, id: &str) {
        let Some(modal) = self.document.get_element_by_id(id) else {
            return;
        };
        match ModalTransition::toggle(dom::has_class(&modal, SHOW_CLASS)) {
            ModalTransition::Open => self.open_modal(&modal),
            ModalTransition::Close => self.close_modal(&modal),
        }
    }

    fn open_modal(&self, modal: &Element) {
        dom::log_result(dom::add_class(modal, SHOW_CLASS));
        dom::log_result(dom::set_style(modal, "display", "block"));
        if let Ok(body) = dom::body(&self.document) {
            dom::log_result(dom::set_style(&body, "overflow", "hidden"));
        }
        if let Some(first) = dom::query_in(modal, FOCUSABLE_SELECTOR) {
            dom::log_result(dom::focus(&first));
        }
    }

    fn close_modal(&self, modal: &Element) {
        dom::log_result(dom::remove_class(modal, SHOW_CLASS));
        if let Ok(body) = dom::body(&self.document) {
            dom::log_result(dom::clear_style(&body, "overflow"));
        }
        let modal = modal.clone();
        Timeout::new(self.config.modal_hide_delay_ms, move || {
            if hide_still_due(dom::has_class(&modal, SHOW_CLASS)) {
                dom::log_result(dom::set_style(&modal, "display", "none"));
            }
        })
        .forget();
    }

    /// Close every shown modal, each with its own delayed hide.
    pub(crate) fn close_all_modals(&self) {
        for modal in dom::query_all(&self.document, SHOWN_SELECTOR) {
            self.close_modal(&modal);
        }
    }

    pub(super) fn bind_modals(self: &Rc<Self>) {
        let document = self.document.clone();
        self.on(&document, "click", on_modal_click);
        self.on(&document, "keydown", on_modal_keydown);
    }
}

fn on_modal_click(controller: &Rc<UiController>, event: &Event) {
    let Some(target) = dom::event_element(event) else {
        return;
    };
    if dom::matches(&target, TOGGLE_SELECTOR) {
        if let Some(id) = target.get_attribute(TOGGLE_ATTR) {
            controller.toggle_modal(&id);
        }
    }
    if dom::matches(&target, DISMISS_SELECTOR) {
        controller.close_all_modals();
    }
}

fn on_modal_keydown(controller: &Rc<UiController>, event: &Event) {
    let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    if interpret_shortcut(&key.key(), key.ctrl_key()) == Some(ShortcutOutcome::Dismiss) {
        controller.close_all_modals();
    }
}
