// SPDX-License-Identifier: MPL-2.0
//! Field validation for the contact form.
//!
//! Validation is a pure function of the field name, its raw value, and
//! whether the field is required. Rules are checked in a fixed order and the
//! first failing rule wins:
//!
//! 1. Required field with an empty (trimmed) value
//! 2. E-mail field whose value is not `local@domain.tld`
//! 3. Phone field whose value is not at least 8 of `0-9`, space, `+ ( ) -`
//!
//! The required check runs first, so an empty optional field never reaches
//! the format checks.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Name of the e-mail field in the contact form.
pub const EMAIL_FIELD: &str = "epost";

/// Name of the phone field in the contact form.
pub const PHONE_FIELD: &str = "telefon";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail pattern is a valid regex")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\s+()\-]{8,}$").expect("phone pattern is a valid regex")
});

/// Reason a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// A required field was left empty.
    Required,
    /// The e-mail field does not look like an address.
    InvalidEmail,
    /// The phone field contains other characters or is too short.
    InvalidPhone,
}

impl FieldError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::Required => "form-error-required",
            FieldError::InvalidEmail => "form-error-email",
            FieldError::InvalidPhone => "form-error-phone",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "required field"),
            FieldError::InvalidEmail => write!(f, "invalid email address"),
            FieldError::InvalidPhone => write!(f, "invalid phone number"),
        }
    }
}

/// Result of validating a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Valid,
    Invalid(FieldError),
}

impl Verdict {
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub fn error(self) -> Option<FieldError> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(error) => Some(error),
        }
    }

    /// Returns the i18n key of the message to show, or `None` when valid.
    #[must_use]
    pub fn message_key(self) -> Option<&'static str> {
        self.error().map(FieldError::i18n_key)
    }
}

/// Format rule selected by a field's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// No format constraint beyond the required check.
    Plain,
    Email,
    Phone,
}

impl FieldRule {
    /// Selects the rule for a field name.
    ///
    /// The Norwegian form names are canonical; the English names are accepted
    /// as aliases so the rule table does not depend on the page language.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        match name {
            EMAIL_FIELD | "email" => FieldRule::Email,
            PHONE_FIELD | "phone" => FieldRule::Phone,
            _ => FieldRule::Plain,
        }
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            FieldRule::Plain => true,
            FieldRule::Email => EMAIL_PATTERN.is_match(value),
            FieldRule::Phone => PHONE_PATTERN.is_match(value),
        }
    }

    fn error(self) -> Option<FieldError> {
        match self {
            FieldRule::Plain => None,
            FieldRule::Email => Some(FieldError::InvalidEmail),
            FieldRule::Phone => Some(FieldError::InvalidPhone),
        }
    }
}

/// Validates one field value.
///
/// ```
/// use alok_site::domain::contact::{validate, FieldError, Verdict};
///
/// assert_eq!(validate("epost", "post@alok.no", true), Verdict::Valid);
/// assert_eq!(
///     validate("epost", "post(at)alok.no", true),
///     Verdict::Invalid(FieldError::InvalidEmail)
/// );
/// assert_eq!(validate("telefon", "", false), Verdict::Valid);
/// ```
#[must_use]
pub fn validate(field_name: &str, raw_value: &str, is_required: bool) -> Verdict {
    let value = raw_value.trim();

    if is_required && value.is_empty() {
        return Verdict::Invalid(FieldError::Required);
    }

    if value.is_empty() {
        return Verdict::Valid;
    }

    let rule = FieldRule::for_name(field_name);
    match rule.error() {
        Some(error) if !rule.accepts(value) => Verdict::Invalid(error),
        _ => Verdict::Valid,
    }
}
