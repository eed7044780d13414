// SPDX-License-Identifier: MPL-2.0
//! Contact form component.
//!
//! Owns the field values, their inline feedback and the submit button. The
//! parent app forwards [`Message`]s and reacts to the returned [`Event`]: on
//! [`Event::Submit`] it starts the request and later hands the result to
//! [`ContactForm::finish_submission`].
//!
//! Text inputs report no blur, so a field counts as left when input arrives
//! in another field, on Tab, or on a submit attempt. Tab also moves focus
//! to the next text input.

mod field;
pub mod submission;
mod view;

pub use field::{render, Annotation, FieldName, FieldState};
pub use submission::{submit, SubmitButton};
pub use view::{view, ServiceOption, ViewContext, SERVICES};

use crate::domain::contact::Payload;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A text field changed.
    FieldChanged(FieldName, String),
    /// A service was picked.
    ServiceSelected(&'static str),
    /// Tab: leave the current field for the next one.
    FocusNext,
    /// Submit button or Enter in a field.
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The form is valid and the payload should be sent.
    Submit(Payload),
    /// Keyboard focus should move to this field's input.
    Focus(FieldName),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [FieldState; 5],
    focused: Option<FieldName>,
    button: SubmitButton,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: FieldName::ALL.map(FieldState::new),
            focused: None,
            button: SubmitButton::default(),
        }
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(name, value) => {
                self.focus(name);
                self.set_value(name, value);
                Event::None
            }
            Message::ServiceSelected(slug) => {
                self.focus(FieldName::Service);
                self.set_value(FieldName::Service, slug);
                Event::None
            }
            Message::FocusNext => match self.focused {
                Some(current) => {
                    let next = current.next();
                    self.focus(next);
                    Event::Focus(next)
                }
                None => Event::None,
            },
            Message::Submit => match self.begin_submission() {
                Some(payload) => Event::Submit(payload),
                None => Event::None,
            },
        }
    }

    #[must_use]
    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[Self::index(name)]
    }

    #[must_use]
    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    #[must_use]
    pub fn focused(&self) -> Option<FieldName> {
        self.focused
    }

    /// Replaces a field value without validating it.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.fields[Self::index(name)].value = value.into();
    }

    /// Moves focus to `name`, validating the field that lost it.
    fn focus(&mut self, name: FieldName) {
        if self.focused != Some(name) {
            self.blur();
            self.focused = Some(name);
        }
    }

    fn blur(&mut self) {
        if let Some(previous) = self.focused.take() {
            self.fields[Self::index(previous)].check();
        }
    }

    /// Validates and renders every field. Returns whether all are valid.
    pub(crate) fn validate_all(&mut self) -> bool {
        self.fields
            .iter_mut()
            .map(FieldState::check)
            .fold(true, |valid, verdict| valid && verdict.is_valid())
    }

    pub(crate) fn payload(&self) -> Payload {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.clone()))
            .collect()
    }

    /// Clears every value and its feedback.
    pub(crate) fn reset(&mut self) {
        self.fields.iter_mut().for_each(FieldState::reset);
        self.focused = None;
    }

    fn index(name: FieldName) -> usize {
        name as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::FieldError;

    #[test]
    fn typing_does_not_validate_the_current_field() {
        let mut form = ContactForm::new();
        form.update(Message::FieldChanged(FieldName::Email, "ola@".into()));
        assert!(!form.field(FieldName::Email).error_styled);
        assert_eq!(form.focused(), Some(FieldName::Email));
    }

    #[test]
    fn leaving_a_field_validates_it() {
        let mut form = ContactForm::new();
        form.update(Message::FieldChanged(FieldName::Email, "ola@".into()));
        form.update(Message::FieldChanged(FieldName::Phone, "1".into()));

        let email = form.field(FieldName::Email);
        assert_eq!(
            email.annotation.map(|a| a.error),
            Some(FieldError::InvalidEmail)
        );
        assert!(!form.field(FieldName::Phone).error_styled);
    }

    #[test]
    fn tab_validates_the_field_it_leaves() {
        let mut form = ContactForm::new();
        form.update(Message::FieldChanged(FieldName::Name, "  ".into()));
        form.update(Message::FocusNext);

        assert!(form.field(FieldName::Name).error_styled);
        assert_eq!(
            form.field(FieldName::Name).annotation.map(|a| a.error),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn tab_moves_focus_to_the_next_input() {
        let mut form = ContactForm::new();
        form.update(Message::FieldChanged(FieldName::Email, "ola@".into()));

        assert_eq!(
            form.update(Message::FocusNext),
            Event::Focus(FieldName::Phone)
        );
        assert_eq!(form.focused(), Some(FieldName::Phone));
        assert!(form.field(FieldName::Email).error_styled);
        assert!(!form.field(FieldName::Phone).error_styled);
    }

    #[test]
    fn tab_outside_the_form_does_nothing() {
        let mut form = ContactForm::new();
        assert_eq!(form.update(Message::FocusNext), Event::None);
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn fixing_a_field_clears_its_feedback_on_blur() {
        let mut form = ContactForm::new();
        form.update(Message::FieldChanged(FieldName::Phone, "abc".into()));
        form.update(Message::FocusNext);
        assert!(form.field(FieldName::Phone).error_styled);

        form.update(Message::FieldChanged(FieldName::Phone, "912 34 567".into()));
        form.update(Message::FocusNext);
        assert!(!form.field(FieldName::Phone).error_styled);
    }

    #[test]
    fn submit_of_empty_form_flags_required_fields() {
        let mut form = ContactForm::new();
        assert_eq!(form.update(Message::Submit), Event::None);

        for name in FieldName::ALL {
            assert_eq!(form.field(name).error_styled, name.required(), "{name:?}");
        }
        assert!(!form.button().is_disabled());
    }

    #[test]
    fn submit_of_valid_form_emits_payload() {
        let mut form = ContactForm::new();
        form.update(Message::FieldChanged(FieldName::Name, "Ola".into()));
        form.update(Message::FieldChanged(FieldName::Email, "ola@example.no".into()));
        form.update(Message::ServiceSelected("elbillader"));
        form.update(Message::FieldChanged(FieldName::Message, "Hei".into()));

        let Event::Submit(payload) = form.update(Message::Submit) else {
            panic!("valid form should submit");
        };
        assert_eq!(payload.get("tjeneste"), Some("elbillader"));
        assert_eq!(payload.get("epost"), Some("ola@example.no"));
        assert!(form.button().is_disabled());
    }

    #[test]
    fn field_index_matches_order() {
        let form = ContactForm::new();
        for name in FieldName::ALL {
            assert_eq!(form.field(name).name, name);
        }
    }
}
