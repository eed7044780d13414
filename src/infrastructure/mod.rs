// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`contact`]: Contact form delivery ([`SimulatedSender`], [`ResendSender`])
//!
//! [`SimulatedSender`]: contact::SimulatedSender
//! [`ResendSender`]: contact::ResendSender

pub mod contact;

pub use contact::{ResendSender, SimulatedSender};
