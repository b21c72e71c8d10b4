//! Notification timeline and loading-state helpers.

use crate::core::config::NotificationConfig;

/// Markup swapped into a control while it is loading.
pub const LOADING_MARKUP: &str = r#"<span class="spinner"></span> Loading..."#;
/// Attribute stashing the label a loading control had before.
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
/// Transform keeping an alert just off the right edge.
pub const OFFSCREEN_TRANSFORM: &str = "translateX(100%)";
/// Transform for an alert in its resting position.
pub const ONSCREEN_TRANSFORM: &str = "translateX(0)";

/// Visual style of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    /// Neutral information.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Needs attention.
    Warning,
    /// Failed action.
    Error,
}

impl NotificationKind {
    /// Parse a kind name, falling back to [`NotificationKind::Info`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Class list for the alert element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Info => "alert alert-info",
            Self::Success => "alert alert-success",
            Self::Warning => "alert alert-warning",
            Self::Error => "alert alert-error",
        }
    }
}

/// Millisecond offsets, relative to insertion, for one notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationSchedule {
    /// When the alert starts sliding in.
    pub enter_at_ms: u32,
    /// When the alert starts sliding out.
    pub exit_at_ms: u32,
    /// When the node is removed from the document.
    pub remove_at_ms: u32,
}

impl NotificationSchedule {
    /// Build the timeline for an alert visible for `duration_ms`.
    #[must_use]
    pub const fn new(config: &NotificationConfig, duration_ms: u32) -> Self {
        Self {
            enter_at_ms: config.enter_delay_ms,
            exit_at_ms: duration_ms,
            remove_at_ms: duration_ms.saturating_add(config.slide_ms),
        }
    }

    /// Exit-to-removal delay, scheduled from the exit timer.
    #[must_use]
    pub const fn slide_out_ms(&self) -> u32 {
        self.remove_at_ms.saturating_sub(self.exit_at_ms)
    }
}

/// Inline styles applied to a freshly inserted alert.
#[must_use]
pub fn alert_styles(config: &NotificationConfig) -> [(&'static str, String); 7] {
    [
        ("position", "fixed".to_string()),
        ("top", "20px".to_string()),
        ("right", "20px".to_string()),
        ("z-index", "9999".to_string()),
        ("min-width", "300px".to_string()),
        ("transform", OFFSCREEN_TRANSFORM.to_string()),
        ("transition", format!("transform {}ms ease", config.slide_ms)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_for_saved_notification() {
        let schedule = NotificationSchedule::new(&NotificationConfig::default(), 1000);
        assert_eq!(
            schedule,
            NotificationSchedule {
                enter_at_ms: 10,
                exit_at_ms: 1000,
                remove_at_ms: 1300,
            }
        );
        assert_eq!(schedule.slide_out_ms(), 300);
    }

    #[test]
    fn default_duration_schedule() {
        let config = NotificationConfig::default();
        let schedule = NotificationSchedule::new(&config, config.default_duration_ms);
        assert_eq!(schedule.remove_at_ms, 3300);
    }

    #[test]
    fn kind_parsing_falls_back_to_info() {
        assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::parse("bogus"), NotificationKind::Info);
        assert_eq!(NotificationKind::Error.class_name(), "alert alert-error");
    }

    #[test]
    fn alert_styles_start_offscreen() {
        let styles = alert_styles(&NotificationConfig::default());
        assert!(styles.contains(&("transform", OFFSCREEN_TRANSFORM.to_string())));
        assert!(styles.contains(&("transition", "transform 300ms ease".to_string())));
    }
}
