//! Core, DOM-free primitives and helpers for the page controller.
pub mod config;
pub mod error;
pub mod logic;
pub mod notify;
pub mod table;
pub mod theme;
pub mod validation;
