// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the page (header, menu, sections, form),
//! the toast manager, localization and diagnostics, and translates messages
//! into side effects like scrolling, submissions or notification timers.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ContactSender;
use crate::diagnostics::{DiagnosticsCollector, WarningType};
use crate::i18n::fluent::I18n;
use crate::infrastructure::contact::{ResendSender, SimulatedSender};
use crate::ui::area_map::AreaMap;
use crate::ui::contact_form::ContactForm;
use crate::ui::header::HeaderState;
use crate::ui::notifications::{self, Notification};
use crate::ui::reveal::RevealTracker;
use crate::ui::sections;
use crate::ui::smooth_scroll::SmoothScroll;
use config::{Config, ContactBackend};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Identifier used for the page scrollable widget.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Last known geometry of the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            content_height: sections::page_height(),
        }
    }
}

impl ScrollPosition {
    /// Largest reachable offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    sender: Arc<dyn ContactSender>,
    header: HeaderState,
    /// Whether the compact menu is open.
    menu_open: bool,
    window_width: f32,
    scroll: ScrollPosition,
    smooth_scroll: SmoothScroll,
    reveal: RevealTracker,
    area_map: AreaMap,
    form: ContactForm,
    /// Print the diagnostics report on exit.
    dump_diagnostics: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("sender", &self.sender.name())
            .field("menu_open", &self.menu_open)
            .field("scroll", &self.scroll)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the mail backend from the config.
///
/// A Resend backend that cannot be built falls back to the simulated one;
/// the returned error explains why.
fn build_sender(
    config: &Config,
    diagnostics: &DiagnosticsCollector,
) -> (Arc<dyn ContactSender>, Option<String>) {
    let contact = &config.contact;
    let simulated = || {
        Arc::new(SimulatedSender::new(contact.simulated_delay()).with_diagnostics(diagnostics.handle()))
            as Arc<dyn ContactSender>
    };

    match contact.backend {
        ContactBackend::Simulated => (simulated(), None),
        ContactBackend::Resend => {
            match ResendSender::from_env(contact.api_key_env(), contact.sender(), contact.recipient()) {
                Ok(sender) => (Arc::new(sender), None),
                Err(err) => (simulated(), Some(err.to_string())),
            }
        }
    }
}

impl App {
    /// Initializes application state from the CLI flags and `settings.toml`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    /// Initializes application state from an already loaded config.
    ///
    /// `config_warning` is the i18n key of a load problem to report.
    fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);

        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        let (sender, backend_error) = build_sender(config, &diagnostics);

        let mut app = App {
            i18n,
            notifications,
            sender,
            header: HeaderState::at(0.0),
            menu_open: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            scroll: ScrollPosition::default(),
            smooth_scroll: SmoothScroll::new(),
            reveal: RevealTracker::default(),
            area_map: AreaMap::new(),
            form: ContactForm::new(),
            dump_diagnostics: flags.dump_diagnostics,
            diagnostics,
        };

        app.observe_scroll(Instant::now());

        // Only one toast is shown; a backend problem outranks a config warning.
        let mut timers = Vec::new();
        if let Some(key) = config_warning {
            timers = app.notifications.notify(notifications::config_warning(key));
        }
        if let Some(reason) = backend_error {
            eprintln!("[WARN] Contact backend unavailable, using simulated sender: {reason}");
            timers = app.notifications.notify(
                Notification::error("notification-backend-fallback")
                    .with_warning_type(WarningType::BackendUnavailable),
            );
        }

        let task = notifications::timers_into_task(timers).map(Message::Notification);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let animating = self.smooth_scroll.is_animating()
            || self.reveal.is_animating(now)
            || self.notifications.is_animating()
            || self.form.is_submitting();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.diagnostics.process_pending();
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Feeds the current scroll position to the header and reveal tracker.
    fn observe_scroll(&mut self, now: Instant) {
        self.header.on_scroll(self.scroll.offset_y);
        self.reveal
            .observe(self.scroll.offset_y, self.scroll.viewport_height, now);
    }
}

/// Builds an app from defaults without touching the user's settings.
#[cfg(test)]
pub(crate) fn test_app(config: &Config) -> App {
    let flags = Flags {
        lang: Some("nb-NO".into()),
        ..Flags::default()
    };
    let (app, _task) = App::with_config(flags, config, None);
    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticEventKind;

    #[test]
    fn max_offset_never_negative() {
        let position = ScrollPosition {
            offset_y: 0.0,
            viewport_height: 10_000.0,
            content_height: 500.0,
        };
        assert_eq!(position.max_offset(), 0.0);
    }

    #[test]
    fn simulated_backend_is_the_default() {
        let diagnostics = DiagnosticsCollector::default();
        let (sender, error) = build_sender(&Config::default(), &diagnostics);
        assert_eq!(sender.name(), "simulated");
        assert!(error.is_none());
    }

    #[test]
    fn resend_without_key_falls_back() {
        let diagnostics = DiagnosticsCollector::default();
        let mut config = Config::default();
        config.contact.backend = ContactBackend::Resend;
        config.contact.api_key_env = Some("ALOK_SITE_TEST_KEY_THAT_IS_NEVER_SET".into());

        let (sender, error) = build_sender(&config, &diagnostics);
        assert_eq!(sender.name(), "simulated");
        assert!(error.is_some_and(|e| e.contains("ALOK_SITE_TEST_KEY_THAT_IS_NEVER_SET")));
    }

    #[test]
    fn backend_fallback_is_reported_as_its_own_warning() {
        let mut config = Config::default();
        config.contact.backend = ContactBackend::Resend;
        config.contact.api_key_env = Some("ALOK_SITE_TEST_KEY_THAT_IS_NEVER_SET".into());

        let mut app = test_app(&config);
        app.diagnostics.process_pending();

        let warnings: Vec<_> = app
            .diagnostics
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::Warning { event } => Some(event.warning_type),
                _ => None,
            })
            .collect();
        assert_eq!(warnings, vec![WarningType::BackendUnavailable]);
        assert!(app.notifications.current().is_some());
    }

    #[test]
    fn config_warning_is_reported_as_config_load() {
        let (mut app, _task) = App::with_config(
            Flags::default(),
            &Config::default(),
            Some("notification-config-load-error".into()),
        );
        app.diagnostics.process_pending();

        assert!(app.diagnostics.iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::ConfigLoad
        )));
    }
}
