//! Thin fallible wrappers over the DOM calls the controllers share.
//!
//! Lookups return `Option`/`Vec` and log JS failures; mutations return
//! `Result<_, UiError>` so handlers decide whether to log or bail.

use crate::core::error::UiError;
use gloo::console;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, NodeList, Window};

pub(crate) fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::MissingWindow)
}

pub(crate) fn document() -> Result<Document, UiError> {
    window()?
        .document()
        .ok_or(UiError::MissingNode { node: "document" })
}

pub(crate) fn body(document: &Document) -> Result<HtmlElement, UiError> {
    document.body().ok_or(UiError::MissingNode { node: "body" })
}

pub(crate) fn root(document: &Document) -> Result<Element, UiError> {
    document
        .document_element()
        .ok_or(UiError::MissingNode {
            node: "documentElement",
        })
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log_error(&UiError::js("querySelectorAll", err));
            Vec::new()
        }
    }
}

pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log_error(&UiError::js("querySelectorAll", err));
            Vec::new()
        }
    }
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document
        .query_selector(selector)
        .map_err(|err| log_error(&UiError::js("querySelector", err)))
        .ok()
        .flatten()
}

pub(crate) fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector)
        .map_err(|err| log_error(&UiError::js("querySelector", err)))
        .ok()
        .flatten()
}

pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    element
        .closest(selector)
        .map_err(|err| log_error(&UiError::js("closest", err)))
        .ok()
        .flatten()
}

pub(crate) fn matches(element: &Element, selector: &str) -> bool {
    element
        .matches(selector)
        .map_err(|err| log_error(&UiError::js("matches", err)))
        .unwrap_or(false)
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn add_class(element: &Element, class: &str) -> Result<(), UiError> {
    element
        .class_list()
        .add_1(class)
        .map_err(|err| UiError::js("classList.add", err))
}

pub(crate) fn remove_class(element: &Element, class: &str) -> Result<(), UiError> {
    element
        .class_list()
        .remove_1(class)
        .map_err(|err| UiError::js("classList.remove", err))
}

pub(crate) fn toggle_class(element: &Element, class: &str) -> Result<bool, UiError> {
    element
        .class_list()
        .toggle(class)
        .map_err(|err| UiError::js("classList.toggle", err))
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) -> Result<(), UiError> {
    if on {
        add_class(element, class)
    } else {
        remove_class(element, class)
    }
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) -> Result<(), UiError> {
    let html = element.dyn_ref::<HtmlElement>().ok_or(UiError::Downcast {
        expected: "HtmlElement",
    })?;
    html.style()
        .set_property(property, value)
        .map_err(|err| UiError::js("style.setProperty", err))
}

pub(crate) fn clear_style(element: &Element, property: &str) -> Result<(), UiError> {
    let html = element.dyn_ref::<HtmlElement>().ok_or(UiError::Downcast {
        expected: "HtmlElement",
    })?;
    html.style()
        .remove_property(property)
        .map(|_| ())
        .map_err(|err| UiError::js("style.removeProperty", err))
}

pub(crate) fn focus(element: &Element) -> Result<(), UiError> {
    let html = element.dyn_ref::<HtmlElement>().ok_or(UiError::Downcast {
        expected: "HtmlElement",
    })?;
    html.focus().map_err(|err| UiError::js("focus", err))
}

pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub(crate) fn log_error(err: &UiError) {
    console::error!("lantern: ui operation failed", err.to_string());
}

pub(crate) fn log_result<T>(result: Result<T, UiError>) {
    if let Err(err) = result {
        log_error(&err);
    }
}
