#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Lantern page behavior layer.
//!
//! `core` holds the DOM-free rules (theme resolution, validation, table sorting
//! and selection, notification timing, configuration) and runs on any target.
//! The wasm32-only `app` module binds those rules to the live document.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::config::UiConfig;
    use crate::core::table::{SortDirection, SortKey, sort_order};
    use crate::core::theme::ThemeMode;

    #[test]
    fn default_config_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn stored_literals_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn mixed_column_sorts_numbers_first() {
        let cells = ["b", "10", "a", "2"];
        let keys: Vec<SortKey> = cells.iter().map(|c| SortKey::from_cell(c)).collect();
        let order: Vec<&str> = sort_order(&keys, SortDirection::Ascending)
            .into_iter()
            .map(|idx| cells[idx])
            .collect();
        assert_eq!(order, vec!["2", "10", "a", "b"]);
    }
}
