//! Form field validation rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// Message shown when a required field is blank.
pub const REQUIRED_MESSAGE: &str = "This field is required";
/// Message shown for a malformed email address.
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
/// Message shown for a malformed phone number.
pub const TEL_MESSAGE: &str = "Please enter a valid phone number";
/// Message shown for a malformed URL.
pub const URL_MESSAGE: &str = "Please enter a valid URL";

static EMAIL: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static TEL: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-()]+$").ok());
static URL: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^https?://.+").ok());

/// Kind of input, derived from the control's `type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// `type="email"`.
    Email,
    /// `type="tel"`.
    Tel,
    /// `type="url"`.
    Url,
    /// Any other control, including selects and textareas.
    Other,
}

impl FieldKind {
    /// Classify an input `type` attribute.
    #[must_use]
    pub fn from_input_type(kind: &str) -> Self {
        match kind {
            "email" => Self::Email,
            "tel" => Self::Tel,
            "url" => Self::Url,
            _ => Self::Other,
        }
    }
}

/// Visible validation state of a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// No styling; either never validated or edited since.
    Untouched,
    /// Passed validation. Success styling only applies to non-empty values.
    Valid,
    /// Failed validation with the message to render.
    Invalid(&'static str),
}

impl FieldState {
    /// Whether success styling should be shown for `value`.
    #[must_use]
    pub fn shows_success(&self, value: &str) -> bool {
        matches!(self, Self::Valid) && !value.trim().is_empty()
    }
}

/// Validate a field value.
///
/// Blank required fields fail first; other rules only run on non-empty values.
#[must_use]
pub fn validate(kind: FieldKind, required: bool, value: &str) -> FieldState {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            FieldState::Invalid(REQUIRED_MESSAGE)
        } else {
            FieldState::Valid
        };
    }
    let (pattern, message) = match kind {
        FieldKind::Email => (&*EMAIL, EMAIL_MESSAGE),
        FieldKind::Tel => (&*TEL, TEL_MESSAGE),
        FieldKind::Url => (&*URL, URL_MESSAGE),
        FieldKind::Other => return FieldState::Valid,
    };
    // A rule whose pattern failed to compile cannot reject input.
    if pattern.as_ref().is_none_or(|regex| regex.is_match(value)) {
        FieldState::Valid
    } else {
        FieldState::Invalid(message)
    }
}

/// Whether a field's label should float above it.
#[must_use]
pub const fn label_floats(value: &str, focused: bool) -> bool {
    !value.is_empty() || focused
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_patterns_compile() {
        assert!(EMAIL.is_some());
        assert!(TEL.is_some());
        assert!(URL.is_some());
    }

    #[test]
    fn required_blank_short_circuits() {
        assert_eq!(
            validate(FieldKind::Email, true, "   "),
            FieldState::Invalid(REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn optional_blank_is_valid_without_success() {
        let state = validate(FieldKind::Email, false, "");
        assert_eq!(state, FieldState::Valid);
        assert!(!state.shows_success(""));
    }

    #[test]
    fn email_requires_dot_in_domain() {
        assert_eq!(
            validate(FieldKind::Email, false, "a@b"),
            FieldState::Invalid(EMAIL_MESSAGE)
        );
        let ok = validate(FieldKind::Email, false, "a@b.com");
        assert_eq!(ok, FieldState::Valid);
        assert!(ok.shows_success("a@b.com"));
    }

    #[test]
    fn tel_accepts_common_punctuation() {
        assert_eq!(
            validate(FieldKind::Tel, false, "+1 (555) 010-9999"),
            FieldState::Valid
        );
        assert_eq!(
            validate(FieldKind::Tel, false, "555-CALL"),
            FieldState::Invalid(TEL_MESSAGE)
        );
    }

    #[test]
    fn url_requires_http_scheme() {
        assert_eq!(
            validate(FieldKind::Url, false, "https://example.com"),
            FieldState::Valid
        );
        assert_eq!(
            validate(FieldKind::Url, false, "ftp://example.com"),
            FieldState::Invalid(URL_MESSAGE)
        );
        assert_eq!(
            validate(FieldKind::Url, false, "http://"),
            FieldState::Invalid(URL_MESSAGE)
        );
    }

    #[test]
    fn values_are_trimmed_before_matching() {
        assert_eq!(
            validate(FieldKind::Email, true, "  a@b.com  "),
            FieldState::Valid
        );
    }

    #[test]
    fn other_kinds_always_pass_when_filled() {
        assert_eq!(validate(FieldKind::Other, true, "anything"), FieldState::Valid);
        assert_eq!(FieldKind::from_input_type("password"), FieldKind::Other);
        assert_eq!(FieldKind::from_input_type("tel"), FieldKind::Tel);
    }

    #[test]
    fn label_floats_on_value_or_focus() {
        assert!(!label_floats("", false));
        assert!(label_floats("", true));
        assert!(label_floats("x", false));
    }
}
