// SPDX-License-Identifier: MPL-2.0
//! Stand-in backend used until real e-mail delivery is configured.

use crate::application::port::{ContactSender, SubmissionError};
use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::domain::contact::{Outcome, Payload};
use futures_util::future::BoxFuture;
use std::time::Duration;

/// Waits for `delay`, logs the payload, and answers `{"success": true}`.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl SimulatedSender {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            diagnostics: None,
        }
    }

    /// Logs every received payload to diagnostics.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }
}

impl ContactSender for SimulatedSender {
    fn send(&self, payload: Payload) -> BoxFuture<'static, Result<Outcome, SubmissionError>> {
        let delay = self.delay;
        let diagnostics = self.diagnostics.clone();

        Box::pin(async move {
            tokio::time::sleep(delay).await;

            if let Some(handle) = diagnostics {
                let details = serde_json::to_string(&payload)
                    .map(|json| format!("Form data: {json}"))
                    .ok();
                handle.log_action_with_details(UserAction::SubmitContactForm, details);
            }

            Ok(Outcome::success())
        })
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
