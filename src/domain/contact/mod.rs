// SPDX-License-Identifier: MPL-2.0
//! Contact form rules.
//!
//! - [`validation`]: the per-field rule table producing a [`Verdict`]
//! - [`submission`]: the [`Payload`] sent to the mail backend and the
//!   [`Outcome`] it answers with

pub mod submission;
pub mod validation;

pub use submission::{Outcome, Payload};
pub use validation::{validate, FieldError, FieldRule, Verdict, EMAIL_FIELD, PHONE_FIELD};
