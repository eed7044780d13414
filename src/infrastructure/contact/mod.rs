// SPDX-License-Identifier: MPL-2.0
//! Contact form delivery adapters.
//!
//! - [`SimulatedSender`]: waits, logs the payload, and reports success
//! - [`ResendSender`]: delivers the submission as an e-mail via the Resend API

mod resend;
mod simulated;

pub use resend::{render_email_text, ResendSender, RESEND_ENDPOINT};
pub use simulated::SimulatedSender;
