// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`contact`]: Delivery of contact form submissions
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared with async tasks
//! - Futures are boxed and `'static` so callers can hand them to `Task::perform`

pub mod contact;

pub use contact::{ContactSender, SubmissionError};
