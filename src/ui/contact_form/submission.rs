// SPDX-License-Identifier: MPL-2.0
//! Contact form submission.
//!
//! A submission runs `Idle → Submitting → Idle`. While submitting, the
//! button is disabled and shows a spinner with the sending label. Whatever
//! the outcome, the button gets its label back and is enabled again.
//!
//! The iced update loop uses the split form: [`ContactForm::begin_submission`]
//! before the request and [`ContactForm::finish_submission`] once the result
//! arrives as a message. [`submit`] composes both around a single await.

use super::ContactForm;
use crate::application::port::{ContactSender, SubmissionError};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, UserAction};
use crate::domain::contact::{Outcome, Payload};
use crate::ui::notifications::{Manager, Notification, Timer};
use std::time::Instant;

/// i18n key of the idle submit label.
pub const SUBMIT_LABEL_KEY: &str = "form-submit";
/// i18n key of the label shown while sending.
pub const SENDING_LABEL_KEY: &str = "form-submit-sending";
/// i18n key of the success toast.
pub const SUCCESS_KEY: &str = "contact-success";
/// i18n key of the fallback error toast.
pub const GENERIC_ERROR_KEY: &str = "contact-error-generic";

/// State of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label_key: &'static str,
    saved_label_key: Option<&'static str>,
    busy_since: Option<Instant>,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label_key: SUBMIT_LABEL_KEY,
            saved_label_key: None,
            busy_since: None,
        }
    }
}

impl SubmitButton {
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        self.label_key
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.busy_since.is_some()
    }

    /// When the button went busy, for the spinner animation.
    #[must_use]
    pub fn busy_since(&self) -> Option<Instant> {
        self.busy_since
    }

    fn set_busy(&mut self) {
        if self.busy_since.is_some() {
            return;
        }
        self.saved_label_key = Some(self.label_key);
        self.label_key = SENDING_LABEL_KEY;
        self.busy_since = Some(Instant::now());
    }

    fn restore(&mut self) {
        if let Some(label) = self.saved_label_key.take() {
            self.label_key = label;
        }
        self.busy_since = None;
    }
}

impl ContactForm {
    /// Starts a submission.
    ///
    /// Validates every field first. Returns the payload to send, or `None`
    /// when a submission is already running or a field is invalid.
    pub fn begin_submission(&mut self) -> Option<Payload> {
        if self.is_submitting() {
            return None;
        }
        self.focused = None;
        if !self.validate_all() {
            return None;
        }

        self.button.set_busy();
        Some(self.payload())
    }

    /// Routes the submission result and ends the submission.
    ///
    /// - success: success toast, all fields cleared
    /// - rejected: error toast with the backend's message, or the fallback
    /// - fault: fallback error toast; the fault is logged
    ///
    /// Field values are kept unless the submission succeeded. Returns the
    /// notification timers to schedule.
    pub fn finish_submission(
        &mut self,
        result: Result<Outcome, SubmissionError>,
        notifications: &mut Manager,
        diagnostics: Option<&DiagnosticsHandle>,
    ) -> Vec<Timer> {
        let notification = match result {
            Ok(outcome) if outcome.success => {
                if let Some(handle) = diagnostics {
                    handle.log_action(UserAction::SubmitContactForm);
                }
                self.reset();
                Notification::success(SUCCESS_KEY)
            }
            Ok(outcome) => {
                let detail = outcome.failure_detail().map(str::to_owned);
                if let Some(handle) = diagnostics {
                    handle.log_error(ErrorEvent::new(
                        ErrorType::SubmissionRejected,
                        detail.as_deref().unwrap_or("rejected without message"),
                    ));
                }
                match detail {
                    Some(text) => Notification::error_text(text),
                    None => Notification::error(GENERIC_ERROR_KEY),
                }
            }
            Err(fault) => {
                if let Some(handle) = diagnostics {
                    handle.log_error(ErrorEvent::new(
                        ErrorType::SubmissionFault,
                        format!("Form submission error: {fault}"),
                    ));
                }
                Notification::error(GENERIC_ERROR_KEY)
            }
        };

        self.button.restore();
        notifications.notify(notification)
    }

    /// Re-enables the submit button and restores its label.
    pub fn restore_button(&mut self) {
        self.button.restore();
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.button.is_disabled()
    }
}

/// Restores the submit button when dropped, so a cancelled submission
/// never leaves it disabled.
struct ButtonGuard<'a> {
    form: &'a mut ContactForm,
}

impl Drop for ButtonGuard<'_> {
    fn drop(&mut self) {
        self.form.restore_button();
    }
}

/// Runs a whole submission against `sender`.
///
/// Returns the notification timers to schedule; empty when nothing was sent.
pub async fn submit(
    form: &mut ContactForm,
    sender: &dyn ContactSender,
    notifications: &mut Manager,
    diagnostics: Option<&DiagnosticsHandle>,
) -> Vec<Timer> {
    let Some(payload) = form.begin_submission() else {
        return Vec::new();
    };

    let guard = ButtonGuard { form };
    let result = sender.send(payload).await;
    guard.form.finish_submission(result, notifications, diagnostics)
}
