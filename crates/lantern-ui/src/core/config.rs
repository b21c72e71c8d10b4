//! Tunable selectors and timings.
//!
//! # Design
//! - Defaults reproduce the stock page behavior; every field is optional in JSON.
//! - Pages override through an inline `application/json` script element.
//! - Validation rejects values the DOM layer cannot use rather than clamping them.

use serde::Deserialize;
use thiserror::Error;

/// Id of the inline script element carrying JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "lantern-config";

/// Errors raised while loading configuration overrides.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The override document was not valid JSON for [`UiConfig`].
    #[error("invalid configuration document: {message}")]
    Parse {
        /// Parser error detail.
        message: String,
    },
    /// A field held a value outside its accepted range.
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        /// Dotted field path.
        field: &'static str,
        /// Human-readable reason.
        message: &'static str,
    },
}

/// Root configuration for the page controller.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Local storage key holding the theme preference.
    pub storage_key: String,
    /// Duration of the page-wide color transition after a toggle.
    pub theme_transition_ms: u32,
    /// Delay between removing `show` and hiding a modal.
    pub modal_hide_delay_ms: u32,
    /// Notification timings.
    pub notification: NotificationConfig,
    /// Scroll reveal options.
    pub reveal: RevealConfig,
    /// Navigation stagger options.
    pub nav: NavConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            theme_transition_ms: 300,
            modal_hide_delay_ms: 300,
            notification: NotificationConfig::default(),
            reveal: RevealConfig::default(),
            nav: NavConfig::default(),
        }
    }
}

/// Notification slide timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    /// Visible time when the caller does not pass a duration.
    pub default_duration_ms: u32,
    /// Slide in/out transition length.
    pub slide_ms: u32,
    /// Delay after insertion before sliding in, so the transition is observed.
    pub enter_delay_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 3000,
            slide_ms: 300,
            enter_delay_ms: 10,
        }
    }
}

/// Intersection observer options for one-shot reveal animations.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Elements observed for reveal.
    pub selectors: Vec<String>,
    /// Visible ratio that triggers the reveal.
    pub threshold: f64,
    /// Bottom margin subtracted from the viewport, in pixels.
    pub bottom_margin_px: u32,
    /// Class added once revealed.
    pub class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: vec![
                ".card".to_string(),
                ".state".to_string(),
                ".analytics".to_string(),
            ],
            threshold: 0.1,
            bottom_margin_px: 50,
            class: "fade-in".to_string(),
        }
    }
}

impl RevealConfig {
    /// Comma-joined selector list for `querySelectorAll`.
    #[must_use]
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }

    /// CSS margin string for the observer root.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// Staggered slide-in for navigation links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Navigation items to stagger.
    pub selector: String,
    /// Delay added per item index.
    pub stagger_ms: u32,
    /// Animation class applied to every item.
    pub class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            selector: ".leftnavpages a".to_string(),
            stagger_ms: 100,
            class: "slide-in-left".to_string(),
        }
    }
}

impl NavConfig {
    /// `animation-delay` value for the item at `index`.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> String {
        let step = u64::from(self.stagger_ms);
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        format!("{}ms", index.saturating_mul(step))
    }
}

impl UiConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| ConfigError::Parse {
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the DOM layer relies on.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "storage_key",
                message: "must not be empty",
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::InvalidField {
                field: "reveal.threshold",
                message: "must be between 0 and 1",
            });
        }
        if self.reveal.selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidField {
                field: "reveal.selectors",
                message: "must not contain empty selectors",
            });
        }
        if self.reveal.class.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "reveal.class",
                message: "must not be empty",
            });
        }
        if self.nav.selector.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "nav.selector",
                message: "must not be empty",
            });
        }
        Ok(())
    }

    /// Inline `transition` applied to `<body>` while the theme flips.
    #[must_use]
    pub fn theme_transition(&self) -> String {
        let ms = self.theme_transition_ms;
        format!("background {ms}ms ease, color {ms}ms ease")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = UiConfig::from_json("{}").expect("defaults");
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.notification.default_duration_ms, 3000);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            UiConfig::from_json(r#"{"reveal":{"threshold":0.25},"modal_hide_delay_ms":150}"#)
                .expect("config");
        assert!((config.reveal.threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.reveal.bottom_margin_px, 50);
        assert_eq!(config.modal_hide_delay_ms, 150);
        assert_eq!(config.theme_transition_ms, 300);
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let err = UiConfig::from_json(r#"{"reveal":{"threshold":1.5}}"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidField {
                field: "reveal.threshold",
                message: "must be between 0 and 1",
            }
        );
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        let err = UiConfig::from_json(r#"{"colour":"red"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn blank_storage_key_is_rejected() {
        let err = UiConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "storage_key",
                ..
            }
        ));
    }

    #[test]
    fn derived_css_strings() {
        let config = UiConfig::default();
        assert_eq!(config.reveal.root_margin(), "0px 0px -50px 0px");
        assert_eq!(config.reveal.selector(), ".card, .state, .analytics");
        assert_eq!(
            config.theme_transition(),
            "background 300ms ease, color 300ms ease"
        );
    }

    #[test]
    fn nav_delay_scales_with_index() {
        let nav = NavConfig::default();
        assert_eq!(nav.delay_for(0), "0ms");
        assert_eq!(nav.delay_for(3), "300ms");
    }
}
