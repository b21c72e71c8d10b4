//! Persistence and environment helpers for the controller.

use crate::app::dom;
use crate::core::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::core::error::UiError;
use crate::core::theme::{ThemeMode, ThemeStore};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use web_sys::{Document, MediaQueryList};

pub(crate) const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme preference stored raw (`"light"` / `"dark"`) in local storage.
#[derive(Debug)]
pub(crate) struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub(crate) const fn new(key: String) -> Self {
        Self { key }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        let value = match LocalStorage::raw().get_item(&self.key) {
            Ok(value) => value?,
            Err(err) => {
                dom::log_error(&UiError::js("localStorage.getItem", err));
                return None;
            }
        };
        let parsed = ThemeMode::parse(&value);
        if parsed.is_none() {
            console::warn!("lantern: ignoring stored theme", value);
        }
        parsed
    }

    fn save(&mut self, theme: ThemeMode) {
        if let Err(err) = LocalStorage::raw().set_item(&self.key, theme.as_str()) {
            log_storage_error("set", &self.key, &format!("{err:?}"));
        }
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}

pub(crate) fn dark_scheme_query() -> Option<MediaQueryList> {
    dom::window()
        .ok()?
        .match_media(DARK_SCHEME_QUERY)
        .map_err(|err| dom::log_error(&UiError::js("matchMedia", err)))
        .ok()
        .flatten()
}

pub(crate) fn system_prefers_dark() -> bool {
    dark_scheme_query().is_some_and(|query| query.matches())
}

/// Read inline JSON overrides, falling back to defaults on any failure.
pub(crate) fn load_config(document: &Document) -> UiConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!("lantern: invalid configuration, using defaults", err.to_string());
            UiConfig::default()
        }
    }
}
