// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `Message` type, an `update` that may return an `Event` for the app,
//! and a `view`.
//!
//! # Page
//!
//! - [`page`] - Section bodies in scroll order, plus the footer
//! - [`sections`] - Section ids, anchors and layout bands
//! - [`header`] - Header scroll state and its style
//! - [`navbar`] - Header links and the compact menu
//! - [`reveal`] - Fade-in of sections as they scroll into view
//! - [`smooth_scroll`] - Eased scrolling to in-page anchors
//! - [`area_map`] - Service area markers
//! - [`contact_form`] - Validated contact form and its submission
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notifications for user feedback
//! - [`widgets`] - Custom Iced widgets (spinner, scroll lock)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icons

pub mod area_map;
pub mod contact_form;
pub mod design_tokens;
pub mod header;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod reveal;
pub mod sections;
pub mod smooth_scroll;
pub mod widgets;
