//! Slide-in notifications and button loading states.

use super::UiController;
use crate::app::dom;
use crate::core::error::UiError;
use crate::core::notify::{
    LOADING_MARKUP, NotificationKind, NotificationSchedule, OFFSCREEN_TRANSFORM,
    ONSCREEN_TRANSFORM, ORIGINAL_TEXT_ATTR, alert_styles,
};
use gloo::timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Element;

const LOADING_CLASS: &str = "loading";

impl UiController {
    /// Show a fixed top-right alert for `duration_ms` (config default when `None`).
    pub(crate) fn show_notification(
        &self,
        message: &str,
        kind: NotificationKind,
        duration_ms: Option<u32>,
    ) {
        let settings = self.config.notification;
        let schedule = NotificationSchedule::new(
            &settings,
            duration_ms.unwrap_or(settings.default_duration_ms),
        );
        let alert = match self.insert_alert(message, kind) {
            Ok(alert) => alert,
            Err(err) => {
                dom::log_error(&err);
                return;
            }
        };

        let entering = alert.clone();
        Timeout::new(schedule.enter_at_ms, move || {
            dom::log_result(dom::set_style(&entering, "transform", ONSCREEN_TRANSFORM));
        })
        .forget();

        Timeout::new(schedule.exit_at_ms, move || {
            dom::log_result(dom::set_style(&alert, "transform", OFFSCREEN_TRANSFORM));
            Timeout::new(schedule.slide_out_ms(), move || alert.remove()).forget();
        })
        .forget();
    }

    fn insert_alert(&self, message: &str, kind: NotificationKind) -> Result<Element, UiError> {
        let alert = self
            .document
            .create_element("div")
            .map_err(|err| UiError::js("createElement", err))?;
        alert.set_class_name(kind.class_name());
        alert.set_text_content(Some(message));
        dom::body(&self.document)?
            .append_child(&alert)
            .map_err(|err| UiError::js("appendChild", err))?;
        for (property, value) in alert_styles(&self.config.notification) {
            dom::set_style(&alert, property, &value)?;
        }
        Ok(alert)
    }
}

/// Disable a control and swap its label for a spinner.
pub(crate) fn add_loading_state(element: &Element) {
    dom::log_result(dom::add_class(element, LOADING_CLASS));
    dom::log_result(set_disabled(element, true));
    let original = element.text_content().unwrap_or_default();
    if let Err(err) = element.set_attribute(ORIGINAL_TEXT_ATTR, &original) {
        dom::log_error(&UiError::js("setAttribute", err));
    }
    element.set_inner_html(LOADING_MARKUP);
}

/// Re-enable a control and restore the label stashed by [`add_loading_state`].
pub(crate) fn remove_loading_state(element: &Element) {
    dom::log_result(dom::remove_class(element, LOADING_CLASS));
    dom::log_result(set_disabled(element, false));
    if let Some(original) = element
        .get_attribute(ORIGINAL_TEXT_ATTR)
        .filter(|text| !text.is_empty())
    {
        element.set_text_content(Some(&original));
    }
}

fn set_disabled(element: &Element, disabled: bool) -> Result<(), UiError> {
    Reflect::set(
        element,
        &JsValue::from_str("disabled"),
        &JsValue::from_bool(disabled),
    )
    .map(|_| ())
    .map_err(|err| UiError::js("disabled", err))
}
