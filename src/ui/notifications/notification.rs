// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::diagnostics::{ErrorType, WarningType};
use crate::i18n::fluent::I18n;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a notification; picks the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// What a notification says.
///
/// Most messages are translation keys. Failure details returned by the mail
/// backend are shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageText {
    Key(String),
    Literal(String),
}

impl MessageText {
    /// Resolves the text for display.
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        match self {
            MessageText::Key(key) => i18n.tr(key),
            MessageText::Literal(text) => text.clone(),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: MessageText,
    warning_type: Option<WarningType>,
    error_type: Option<ErrorType>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: MessageText::Key(message_key.into()),
            warning_type: None,
            error_type: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Creates an error notification showing `text` as is.
    pub fn error_text(text: impl Into<String>) -> Self {
        Self {
            message: MessageText::Literal(text.into()),
            ..Self::new(Severity::Error, String::new())
        }
    }

    /// Records the notification as a warning of this type in diagnostics.
    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    /// Records the notification as an error of this type in diagnostics.
    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &MessageText {
        &self.message
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn literal_text_bypasses_translation() {
        let i18n = I18n::default();
        let notification = Notification::error_text("Ugyldig mottaker");
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message().resolve(&i18n), "Ugyldig mottaker");
    }

    #[test]
    fn keys_resolve_through_i18n() {
        let i18n = I18n::default();
        let text = MessageText::Key("no-such-key".into()).resolve(&i18n);
        assert_eq!(text, "MISSING: no-such-key");
    }

    #[test]
    fn diagnostic_types_are_carried() {
        let notification =
            Notification::error("contact-error-generic").with_error_type(ErrorType::SubmissionFault);
        assert_eq!(notification.error_type(), Some(ErrorType::SubmissionFault));
        assert_eq!(notification.warning_type(), None);
    }
}
