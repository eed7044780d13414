// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with no UI dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Everything here can be tested without a running application window.
//!
//! # Modules
//!
//! - [`contact`]: Contact form rules ([`Verdict`](contact::Verdict),
//!   [`Payload`](contact::Payload), [`Outcome`](contact::Outcome))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod contact;
pub mod diagnostics;
