// SPDX-License-Identifier: MPL-2.0
//! `alok_site` is the ALOK AS company site rendered as an Iced application.
//!
//! The page scrolls through the company's sections under a fixed header,
//! fades sections in as they come into view, and ends with a contact form
//! that validates its fields and reports the submission result in a toast.
//!
//! # Layers
//!
//! - [`domain`] - validation rules and submission data, free of UI and I/O
//! - [`application`] - ports the UI talks to (the mail backend)
//! - [`infrastructure`] - port adapters (simulated backend, Resend API)
//! - [`ui`] - components, widgets and design tokens
//! - [`app`] - the Iced application shell, configuration and paths

#![doc(html_root_url = "https://docs.rs/alok_site/0.1.0")]

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
