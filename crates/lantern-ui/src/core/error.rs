//! Error types for DOM glue operations.
//!
//! Handlers never surface these to the page; they log and no-op.

use thiserror::Error;

/// Failure raised while reading or mutating page state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// The global `window` object is unavailable.
    #[error("window unavailable")]
    MissingWindow,
    /// The document or one of its required nodes is unavailable.
    #[error("document node unavailable: {node}")]
    MissingNode {
        /// Node that could not be resolved (e.g. `body`).
        node: &'static str,
    },
    /// A browser API threw.
    #[error("{operation} failed: {detail}")]
    Js {
        /// Operation label.
        operation: &'static str,
        /// Stringified exception.
        detail: String,
    },
    /// An element was not of the expected interface.
    #[error("element is not a {expected}")]
    Downcast {
        /// Interface name the element was expected to implement.
        expected: &'static str,
    },
}

impl UiError {
    /// Build a [`UiError::Js`] from an operation label and a debug-printable detail.
    pub fn js(operation: &'static str, detail: impl std::fmt::Debug) -> Self {
        Self::Js {
            operation,
            detail: format!("{detail:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiError;

    #[test]
    fn js_error_formats_operation_and_detail() {
        let err = UiError::js("classList.add", "SyntaxError");
        assert_eq!(err.to_string(), "classList.add failed: \"SyntaxError\"");
    }

    #[test]
    fn missing_node_names_the_node() {
        let err = UiError::MissingNode { node: "body" };
        assert_eq!(err.to_string(), "document node unavailable: body");
    }
}
