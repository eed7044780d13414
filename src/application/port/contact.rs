// SPDX-License-Identifier: MPL-2.0
//! Contact submission port.
//!
//! The contact form hands its [`Payload`] to a [`ContactSender`] and gets back
//! either an [`Outcome`] or a [`SubmissionError`]. An outcome with
//! `success == false` and an error are both failures for the user; they only
//! differ in how the displayed message is chosen.

use crate::domain::contact::{Outcome, Payload};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// SubmissionError
// =============================================================================

/// Unexpected fault raised while delivering a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The backend could not be reached.
    Network(String),

    /// The backend answered with a non-success HTTP status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The backend is not configured (missing API key, recipient, ...).
    NotConfigured(String),

    /// The reply could not be understood.
    InvalidResponse(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Network(msg) => write!(f, "Network error: {msg}"),
            SubmissionError::Http { status, body } => {
                write!(f, "Backend answered {status}: {body}")
            }
            SubmissionError::NotConfigured(what) => write!(f, "Not configured: {what}"),
            SubmissionError::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

// =============================================================================
// ContactSender
// =============================================================================

/// Delivers contact form submissions.
///
/// # Example
///
/// ```
/// use alok_site::application::port::{ContactSender, SubmissionError};
/// use alok_site::domain::contact::{Outcome, Payload};
/// use futures_util::future::BoxFuture;
///
/// struct AlwaysOk;
///
/// impl ContactSender for AlwaysOk {
///     fn send(&self, _payload: Payload) -> BoxFuture<'static, Result<Outcome, SubmissionError>> {
///         Box::pin(async { Ok(Outcome::success()) })
///     }
/// }
/// ```
pub trait ContactSender: Send + Sync {
    /// Sends one submission. The returned future owns everything it needs.
    fn send(&self, payload: Payload) -> BoxFuture<'static, Result<Outcome, SubmissionError>>;

    /// Short backend name used in diagnostics.
    fn name(&self) -> &'static str {
        "contact-sender"
    }
}
