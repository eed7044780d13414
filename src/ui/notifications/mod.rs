// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! At most one toast is on screen. A new notification replaces the current
//! one at once, without queueing.
//!
//! # Components
//!
//! - [`notification`] - `Notification` request with its severity and text
//! - [`manager`] - `Manager` owning the lifecycle and its timers
//! - [`styles`] - the shared toast stylesheet, installed once per process
//! - [`toast`] - rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, timers_into_task};
//!
//! let timers = manager.notify(Notification::success("contact-success"));
//! return timers_into_task(timers).map(Message::Notification);
//! ```

pub mod manager;
pub mod notification;
pub mod styles;
mod toast;

pub use manager::{
    config_warning, timers_into_task, Instance, Manager, Message as NotificationMessage, Phase,
    Timer,
};
pub use notification::{MessageText, Notification, NotificationId, Severity};
pub use toast::Toast;
