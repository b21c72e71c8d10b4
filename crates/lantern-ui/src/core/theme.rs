//! Theme preference model and resolution rules.
//!
//! # Design
//! - The stored preference wins; without one the system color scheme decides.
//! - Initial resolution and system changes apply without persisting, so a visitor
//!   keeps following the system until they toggle explicitly.
//! - Storage is re-read on every system change instead of caching "has override".

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than the two literals is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown by the toggle control: the mode a click would switch to.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }

    /// Map a `prefers-color-scheme: dark` match result to a mode.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Backing store for the single persisted preference.
pub trait ThemeStore {
    /// Currently stored preference, if any.
    fn load(&self) -> Option<ThemeMode>;
    /// Persist an explicit preference.
    fn save(&mut self, theme: ThemeMode);
}

/// Active theme plus the store it persists to.
#[derive(Debug)]
pub struct ThemeState<S> {
    store: S,
    current: ThemeMode,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Resolve the initial theme from storage, falling back to the system preference.
    pub fn resolve(store: S, system_prefers_dark: bool) -> Self {
        let current = store
            .load()
            .unwrap_or_else(|| ThemeMode::from_system(system_prefers_dark));
        Self { store, current }
    }

    /// Active theme.
    #[must_use]
    pub const fn current(&self) -> ThemeMode {
        self.current
    }

    /// Explicitly select a theme and persist it.
    pub fn set(&mut self, theme: ThemeMode) -> ThemeMode {
        self.current = theme;
        self.store.save(theme);
        theme
    }

    /// Flip the active theme and persist the result.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.current.toggled())
    }

    /// React to a system color-scheme change.
    ///
    /// Returns the new theme when it should be applied, or `None` when an
    /// explicit preference is stored.
    pub fn follow_system(&mut self, prefers_dark: bool) -> Option<ThemeMode> {
        if self.store.load().is_some() {
            return None;
        }
        self.current = ThemeMode::from_system(prefers_dark);
        Some(self.current)
    }

    #[cfg(test)]
    pub(crate) const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore(Option<ThemeMode>);

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<ThemeMode> {
            self.0
        }

        fn save(&mut self, theme: ThemeMode) {
            self.0 = Some(theme);
        }
    }

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("Dark"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn stored_value_wins_over_system() {
        let state = ThemeState::resolve(MemoryStore(Some(ThemeMode::Light)), true);
        assert_eq!(state.current(), ThemeMode::Light);
    }

    #[test]
    fn system_preference_used_when_nothing_stored() {
        assert_eq!(
            ThemeState::resolve(MemoryStore::default(), true).current(),
            ThemeMode::Dark
        );
        assert_eq!(
            ThemeState::resolve(MemoryStore::default(), false).current(),
            ThemeMode::Light
        );
    }

    #[test]
    fn resolution_does_not_persist() {
        let state = ThemeState::resolve(MemoryStore::default(), true);
        assert_eq!(state.store().load(), None);
    }

    #[test]
    fn double_toggle_restores_resolved_theme() {
        for stored in [None, Some(ThemeMode::Light), Some(ThemeMode::Dark)] {
            for system_dark in [false, true] {
                let mut state = ThemeState::resolve(MemoryStore(stored), system_dark);
                let original = state.current();
                state.toggle();
                assert_eq!(state.current(), original.toggled());
                state.toggle();
                assert_eq!(state.current(), original);
                assert_eq!(state.store().load(), Some(original));
            }
        }
    }

    #[test]
    fn system_change_ignored_with_stored_override() {
        let mut state = ThemeState::resolve(MemoryStore(Some(ThemeMode::Light)), false);
        assert_eq!(state.follow_system(true), None);
        assert_eq!(state.current(), ThemeMode::Light);
    }

    #[test]
    fn system_change_rechecks_storage_at_event_time() {
        let mut state = ThemeState::resolve(MemoryStore::default(), false);
        assert_eq!(state.follow_system(true), Some(ThemeMode::Dark));
        state.set(ThemeMode::Light);
        assert_eq!(state.follow_system(true), None);
        assert_eq!(state.current(), ThemeMode::Light);
    }

    #[test]
    fn icon_reflects_current_mode() {
        assert_eq!(ThemeMode::Light.icon(), "🌙");
        assert_eq!(ThemeMode::Dark.icon(), "☀️");
    }
}
