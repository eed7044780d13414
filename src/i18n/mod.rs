// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Translation files are embedded at
//! compile time from `assets/i18n/<locale>.ftl`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to Norwegian Bokmål when a locale is unavailable

pub mod fluent;
