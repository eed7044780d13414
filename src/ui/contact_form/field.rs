// SPDX-License-Identifier: MPL-2.0
//! Contact form fields and their inline feedback.

use crate::domain::contact::{validate, FieldError, Verdict, EMAIL_FIELD, PHONE_FIELD};

/// Named fields of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Service,
        FieldName::Message,
    ];

    /// Submitted field name; the validator keys its rules on it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "navn",
            FieldName::Email => EMAIL_FIELD,
            FieldName::Phone => PHONE_FIELD,
            FieldName::Service => "tjeneste",
            FieldName::Message => "melding",
        }
    }

    #[must_use]
    pub fn required(self) -> bool {
        matches!(self, FieldName::Name | FieldName::Email | FieldName::Message)
    }

    /// Next text input in tab order, wrapping around. The service picker
    /// takes no keyboard focus and is skipped.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        (1..=Self::ALL.len())
            .map(|step| Self::ALL[(index + step) % Self::ALL.len()])
            .find(|name| name.is_text_input())
            .unwrap_or(self)
    }

    #[must_use]
    pub fn is_text_input(self) -> bool {
        self != FieldName::Service
    }

    /// Widget id of the field's text input.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            FieldName::Name => "contact-navn",
            FieldName::Email => "contact-epost",
            FieldName::Phone => "contact-telefon",
            FieldName::Service => "contact-tjeneste",
            FieldName::Message => "contact-melding",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FieldName::Name => "form-label-name",
            FieldName::Email => "form-label-email",
            FieldName::Phone => "form-label-phone",
            FieldName::Service => "form-label-service",
            FieldName::Message => "form-label-message",
        }
    }

    #[must_use]
    pub fn placeholder_key(self) -> &'static str {
        match self {
            FieldName::Name => "form-placeholder-name",
            FieldName::Email => "form-placeholder-email",
            FieldName::Phone => "form-placeholder-phone",
            FieldName::Service => "form-placeholder-service",
            FieldName::Message => "form-placeholder-message",
        }
    }
}

/// Inline message shown under an invalid field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub error: FieldError,
}

impl Annotation {
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        self.error.i18n_key()
    }
}

/// One field's value and feedback.
///
/// A field carries at most one annotation; rendering replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub name: FieldName,
    pub value: String,
    pub error_styled: bool,
    pub annotation: Option<Annotation>,
}

impl FieldState {
    #[must_use]
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
            error_styled: false,
            annotation: None,
        }
    }

    #[must_use]
    pub fn required(&self) -> bool {
        self.name.required()
    }

    /// Validates the current value.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        validate(self.name.as_str(), &self.value, self.required())
    }

    /// Validates the current value and renders the verdict on the field.
    pub fn check(&mut self) -> Verdict {
        let verdict = self.verdict();
        render(self, &verdict);
        verdict
    }

    /// Empties the value and removes any feedback.
    pub fn reset(&mut self) {
        self.value.clear();
        render(self, &Verdict::Valid);
    }
}

/// Applies `verdict` to `field`.
///
/// Previous feedback is always cleared first, so rendering the same verdict
/// twice leaves the field as rendering it once.
pub fn render(field: &mut FieldState, verdict: &Verdict) {
    field.annotation = None;
    field.error_styled = false;

    if let Verdict::Invalid(error) = *verdict {
        field.error_styled = true;
        field.annotation = Some(Annotation { error });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_match_the_form() {
        let required: Vec<_> = FieldName::ALL.into_iter().filter(|f| f.required()).collect();
        assert_eq!(
            required,
            vec![FieldName::Name, FieldName::Email, FieldName::Message]
        );
    }

    #[test]
    fn render_is_idempotent() {
        let mut once = FieldState::new(FieldName::Email);
        let verdict = Verdict::Invalid(FieldError::InvalidEmail);
        render(&mut once, &verdict);

        let mut twice = once.clone();
        render(&mut twice, &verdict);

        assert_eq!(once, twice);
        assert_eq!(
            twice.annotation,
            Some(Annotation {
                error: FieldError::InvalidEmail
            })
        );
    }

    #[test]
    fn valid_verdict_clears_feedback() {
        let mut field = FieldState::new(FieldName::Name);
        render(&mut field, &Verdict::Invalid(FieldError::Required));
        assert!(field.error_styled);

        render(&mut field, &Verdict::Valid);
        assert!(!field.error_styled);
        assert!(field.annotation.is_none());
    }

    #[test]
    fn new_error_replaces_old_annotation() {
        let mut field = FieldState::new(FieldName::Phone);
        render(&mut field, &Verdict::Invalid(FieldError::Required));
        render(&mut field, &Verdict::Invalid(FieldError::InvalidPhone));
        assert_eq!(
            field.annotation.map(|a| a.message_key()),
            Some("form-error-phone")
        );
    }

    #[test]
    fn check_uses_field_rules() {
        let mut field = FieldState::new(FieldName::Email);
        field.value = "  ".into();
        assert_eq!(field.check(), Verdict::Invalid(FieldError::Required));

        field.value = "ola@nordmann".into();
        assert_eq!(field.check(), Verdict::Invalid(FieldError::InvalidEmail));

        field.value = "ola@nordmann.no".into();
        assert!(field.check().is_valid());
        assert!(field.annotation.is_none());
    }

    #[test]
    fn optional_phone_may_be_empty() {
        let mut field = FieldState::new(FieldName::Phone);
        assert!(field.check().is_valid());
        field.value = "12ab".into();
        assert_eq!(field.check(), Verdict::Invalid(FieldError::InvalidPhone));
    }

    #[test]
    fn tab_order_wraps_and_skips_the_picker() {
        assert_eq!(FieldName::Name.next(), FieldName::Email);
        assert_eq!(FieldName::Phone.next(), FieldName::Message);
        assert_eq!(FieldName::Service.next(), FieldName::Message);
        assert_eq!(FieldName::Message.next(), FieldName::Name);
    }
}
