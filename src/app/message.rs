// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::SubmissionError;
use crate::domain::contact::Outcome;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    },
    /// The mouse wheel turned; interrupts a running anchor scroll.
    WheelScrolled,
    /// Result of the contact form submission.
    SubmissionFinished(Result<Outcome, SubmissionError>),
    /// Animation frame.
    Tick(Instant),
    WindowResized {
        width: f32,
        height: f32,
    },
    EscapePressed,
    TabPressed,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `nb-NO`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ALOK_SITE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Print the diagnostics report as JSON to stdout on exit.
    pub dump_diagnostics: bool,
}
