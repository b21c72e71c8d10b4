//! Script-facing `window.lantern` object.
//!
//! Each method is a closure holding a strong controller reference, so the
//! published object keeps the controller alive for the page lifetime.

use super::{UiController, notify};
use crate::core::error::UiError;
use crate::core::notify::NotificationKind;
use crate::core::theme::ThemeMode;
use gloo::console;
use js_sys::{Object, Reflect};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::Element;

/// Build the handle object exposing the controller to page scripts.
pub(super) fn build_handle(controller: &Rc<UiController>) -> Result<Object, UiError> {
    let handle = Object::new();

    let getter = Object::new();
    let this = Rc::clone(controller);
    let theme = Closure::<dyn Fn() -> String>::new(move || {
        this.current_theme().as_str().to_string()
    });
    set(&getter, "get", &theme.into_js_value())?;
    set(&getter, "enumerable", &JsValue::TRUE)?;
    Object::define_property(&handle, &JsValue::from_str("theme"), &getter);

    let this = Rc::clone(controller);
    let set_theme = Closure::<dyn Fn(String)>::new(move |theme: String| {
        match ThemeMode::parse(&theme) {
            Some(mode) => this.set_theme(mode),
            None => console::warn!("lantern: unknown theme", theme),
        }
    });
    set(&handle, "setTheme", &set_theme.into_js_value())?;

    let this = Rc::clone(controller);
    let toggle_theme = Closure::<dyn Fn()>::new(move || this.toggle_theme());
    set(&handle, "toggleTheme", &toggle_theme.into_js_value())?;

    let this = Rc::clone(controller);
    let toggle_modal = Closure::<dyn Fn(String)>::new(move |id: String| this.toggle_modal(&id));
    set(&handle, "toggleModal", &toggle_modal.into_js_value())?;

    let this = Rc::clone(controller);
    let close_all = Closure::<dyn Fn()>::new(move || this.close_all_modals());
    set(&handle, "closeAllModals", &close_all.into_js_value())?;

    let this = Rc::clone(controller);
    let show_notification = Closure::<dyn Fn(String, Option<String>, Option<u32>)>::new(
        move |message: String, kind: Option<String>, duration_ms: Option<u32>| {
            let kind = kind
                .as_deref()
                .map(NotificationKind::parse)
                .unwrap_or_default();
            this.show_notification(&message, kind, duration_ms);
        },
    );
    set(&handle, "showNotification", &show_notification.into_js_value())?;

    let add_loading = Closure::<dyn Fn(Element)>::new(|element: Element| {
        notify::add_loading_state(&element);
    });
    set(&handle, "addLoadingState", &add_loading.into_js_value())?;

    let remove_loading = Closure::<dyn Fn(Element)>::new(|element: Element| {
        notify::remove_loading_state(&element);
    });
    set(&handle, "removeLoadingState", &remove_loading.into_js_value())?;

    Ok(handle)
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), UiError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| UiError::js("handle property", err))
}
