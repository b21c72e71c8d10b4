//! Theme application, toggle control, system-preference tracking, and Ctrl+K.

use super::UiController;
use crate::app::{dom, preferences};
use crate::core::error::UiError;
use crate::core::logic::{ShortcutOutcome, interpret_shortcut};
use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MediaQueryListEvent};

const TOGGLE_SELECTOR: &str = ".theme-toggle";
const ICON_SELECTOR: &str = ".theme-icon";
const THEME_ATTR: &str = "data-theme";

impl UiController {
    pub(crate) fn current_theme(&self) -> ThemeMode {
        self.theme.borrow().current()
    }

    /// Explicitly select and persist a theme.
    pub(crate) fn set_theme(&self, theme: ThemeMode) {
        let applied = self.theme.borrow_mut().set(theme);
        self.apply_theme(applied);
    }

    /// Flip the theme with a short page-wide color transition.
    pub(crate) fn toggle_theme(&self) {
        let next = self.theme.borrow_mut().toggle();
        self.apply_theme(next);

        let Ok(body) = dom::body(&self.document) else {
            return;
        };
        dom::log_result(dom::set_style(
            &body,
            "transition",
            &self.config.theme_transition(),
        ));
        Timeout::new(self.config.theme_transition_ms, move || {
            dom::log_result(dom::clear_style(&body, "transition"));
        })
        .forget();
    }

    pub(super) fn apply_initial_theme(&self) {
        self.apply_theme(self.current_theme());
    }

    fn apply_theme(&self, theme: ThemeMode) {
        let result = dom::root(&self.document).and_then(|root| {
            root.set_attribute(THEME_ATTR, theme.as_str())
                .map_err(|err| UiError::js("setAttribute", err))
        });
        dom::log_result(result);
        self.update_theme_icon(theme);
    }

    fn update_theme_icon(&self, theme: ThemeMode) {
        let toggle = self.theme_toggle.borrow();
        if let Some(icon) = toggle
            .as_ref()
            .and_then(|toggle| dom::query_in(toggle, ICON_SELECTOR))
        {
            icon.set_text_content(Some(theme.icon()));
        }
    }

    pub(super) fn bind_theme_toggle(self: &Rc<Self>) {
        let toggle = match dom::query(&self.document, TOGGLE_SELECTOR) {
            Some(existing) => existing,
            None => match self.create_theme_toggle() {
                Ok(created) => created,
                Err(err) => {
                    dom::log_error(&err);
                    return;
                }
            },
        };
        self.on(&toggle, "click", |controller, _event| controller.toggle_theme());
        *self.theme_toggle.borrow_mut() = Some(toggle);
        self.update_theme_icon(self.current_theme());
    }

    fn create_theme_toggle(&self) -> Result<Element, UiError> {
        let button = self
            .document
            .create_element("button")
            .map_err(|err| UiError::js("createElement", err))?;
        button.set_class_name("theme-toggle");
        for (name, value) in [
            ("title", "Toggle light/dark mode"),
            ("aria-label", "Toggle theme"),
        ] {
            button
                .set_attribute(name, value)
                .map_err(|err| UiError::js("setAttribute", err))?;
        }
        button.set_inner_html(r#"<span class="theme-icon"></span>"#);
        dom::body(&self.document)?
            .append_child(&button)
            .map_err(|err| UiError::js("appendChild", err))?;
        Ok(button)
    }

    pub(super) fn bind_system_theme(self: &Rc<Self>) {
        let Some(query) = preferences::dark_scheme_query() else {
            console::debug!("lantern: color-scheme media query unavailable");
            return;
        };
        self.on(&query, "change", on_system_theme_change);
    }

    pub(super) fn bind_theme_shortcut(self: &Rc<Self>) {
        let document = self.document.clone();
        self.on_preventable(&document, "keydown", on_theme_shortcut);
    }
}

fn on_system_theme_change(controller: &Rc<UiController>, event: &Event) {
    let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
        return;
    };
    let followed = controller.theme.borrow_mut().follow_system(change.matches());
    if let Some(theme) = followed {
        controller.apply_theme(theme);
    }
}

fn on_theme_shortcut(controller: &Rc<UiController>, event: &Event) {
    let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    let Some(outcome @ ShortcutOutcome::ToggleTheme) = interpret_shortcut(&key.key(), key.ctrl_key())
    else {
        return;
    };
    if outcome.prevents_default() {
        event.prevent_default();
    }
    controller.toggle_theme();
}
