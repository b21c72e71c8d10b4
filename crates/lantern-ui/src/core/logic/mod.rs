//! Pure interaction helpers extracted from the DOM handlers for non-wasm testing.

use std::cell::Cell;

/// Selector for the first element a newly opened modal should focus.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Semantic action for a document-level key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Flip the theme and suppress the browser default.
    ToggleTheme,
    /// Close shown modals and the open dropdown.
    Dismiss,
}

impl ShortcutOutcome {
    /// Whether the browser default action must be suppressed.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::ToggleTheme)
    }
}

/// Map a key press to a shortcut outcome.
#[must_use]
pub fn interpret_shortcut(key: &str, ctrl: bool) -> Option<ShortcutOutcome> {
    match key {
        "k" | "K" if ctrl => Some(ShortcutOutcome::ToggleTheme),
        "Escape" => Some(ShortcutOutcome::Dismiss),
        _ => None,
    }
}

/// Where a document click landed relative to dropdown markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropdownHit {
    /// The target is inside (or is) a `.dropdown`.
    pub inside_dropdown: bool,
    /// The target is inside (or is) a `.dropdown-toggle`.
    pub on_toggle: bool,
}

/// Effect of a document click on dropdowns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownOutcome {
    /// Close every open dropdown.
    CloseAll,
    /// Flip the dropdown containing the target.
    Toggle,
    /// Click inside a dropdown panel; leave state alone.
    Ignore,
}

/// Resolve a dropdown click. The outside check runs before the toggle check.
#[must_use]
pub const fn dropdown_click(hit: DropdownHit) -> DropdownOutcome {
    if !hit.inside_dropdown {
        return DropdownOutcome::CloseAll;
    }
    if hit.on_toggle {
        DropdownOutcome::Toggle
    } else {
        DropdownOutcome::Ignore
    }
}

/// Transition a modal toggle should perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransition {
    /// Show the modal.
    Open,
    /// Hide the modal.
    Close,
}

impl ModalTransition {
    /// Transition for a toggle request given the current shown state.
    #[must_use]
    pub const fn toggle(shown: bool) -> Self {
        if shown { Self::Close } else { Self::Open }
    }
}

/// Whether a delayed modal hide should still take effect when its timer fires.
#[must_use]
pub const fn hide_still_due(shown_at_fire_time: bool) -> bool {
    !shown_at_fire_time
}

/// Records whether a page controller has been installed.
///
/// Tracked on the Rust side so page markup that shadows a window property
/// cannot block installation.
#[derive(Debug, Default)]
pub struct InstallGuard {
    installed: Cell<bool>,
}

impl InstallGuard {
    /// An unclaimed guard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            installed: Cell::new(false),
        }
    }

    /// Claim the guard. Returns `true` only for the first caller.
    #[must_use]
    pub fn claim(&self) -> bool {
        !self.installed.replace(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_guard_admits_one_controller() {
        let guard = InstallGuard::new();
        assert!(guard.claim());
        assert!(!guard.claim());
        assert!(!guard.claim());
    }

    #[test]
    fn separate_guards_are_independent() {
        let first = InstallGuard::default();
        let second = InstallGuard::new();
        assert!(first.claim());
        assert!(second.claim());
    }

    #[test]
    fn ctrl_k_toggles_theme() {
        assert_eq!(
            interpret_shortcut("k", true),
            Some(ShortcutOutcome::ToggleTheme)
        );
        assert_eq!(
            interpret_shortcut("K", true),
            Some(ShortcutOutcome::ToggleTheme)
        );
        assert_eq!(interpret_shortcut("k", false), None);
        assert!(ShortcutOutcome::ToggleTheme.prevents_default());
    }

    #[test]
    fn escape_dismisses_regardless_of_modifiers() {
        assert_eq!(
            interpret_shortcut("Escape", false),
            Some(ShortcutOutcome::Dismiss)
        );
        assert_eq!(
            interpret_shortcut("Escape", true),
            Some(ShortcutOutcome::Dismiss)
        );
        assert!(!ShortcutOutcome::Dismiss.prevents_default());
    }

    #[test]
    fn outside_click_closes_before_toggle_check() {
        let outside = DropdownHit {
            inside_dropdown: false,
            on_toggle: true,
        };
        assert_eq!(dropdown_click(outside), DropdownOutcome::CloseAll);
    }

    #[test]
    fn toggle_click_flips_owning_dropdown() {
        let hit = DropdownHit {
            inside_dropdown: true,
            on_toggle: true,
        };
        assert_eq!(dropdown_click(hit), DropdownOutcome::Toggle);
        let panel = DropdownHit {
            inside_dropdown: true,
            on_toggle: false,
        };
        assert_eq!(dropdown_click(panel), DropdownOutcome::Ignore);
    }

    #[test]
    fn modal_toggle_is_state_driven() {
        assert_eq!(ModalTransition::toggle(false), ModalTransition::Open);
        assert_eq!(ModalTransition::toggle(true), ModalTransition::Close);
    }

    #[test]
    fn reopened_modal_skips_delayed_hide() {
        assert!(hide_still_due(false));
        assert!(!hide_still_due(true));
    }
}
