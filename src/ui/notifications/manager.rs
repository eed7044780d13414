// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` shows at most one toast. A toast enters, stays visible,
//! then leaves, either on its own after [`NOTIFICATION_AUTO_DISMISS`] or when
//! the user closes it. Every timed step is returned to the caller as a
//! [`Timer`] carrying the id of the toast it belongs to, so a timer that
//! fires after its toast was replaced or removed changes nothing.

use super::notification::{MessageText, Notification, NotificationId};
use super::styles;
use crate::app::config::{NOTIFICATION_AUTO_DISMISS, NOTIFICATION_TRANSITION};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, UserAction, WarningEvent, WarningType};
use iced::Task;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close control pressed.
    Dismiss(NotificationId),
    /// Enter transition finished.
    EnterFinished(NotificationId),
    /// Display time elapsed.
    AutoDismiss(NotificationId),
    /// Leave transition finished.
    Remove(NotificationId),
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

/// The toast currently on screen.
#[derive(Debug, Clone)]
pub struct Instance {
    notification: Notification,
    phase: Phase,
    phase_started: Instant,
}

impl Instance {
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Progress of the current transition in `0.0..=1.0`.
    ///
    /// Always `1.0` while visible.
    #[must_use]
    pub fn transition_progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Visible => 1.0,
            Phase::Entering | Phase::Leaving => {
                let elapsed = now.saturating_duration_since(self.phase_started);
                (elapsed.as_secs_f32() / NOTIFICATION_TRANSITION.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_started = Instant::now();
    }
}

/// A message to deliver after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub delay: Duration,
    pub message: Message,
}

impl Timer {
    /// Turns the timer into a task that sleeps, then yields the message.
    pub fn into_task(self) -> Task<Message> {
        let Timer { delay, message } = self;
        Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                message
            },
            std::convert::identity,
        )
    }
}

/// Batches timers into one task.
pub fn timers_into_task(timers: impl IntoIterator<Item = Timer>) -> Task<Message> {
    Task::batch(timers.into_iter().map(Timer::into_task))
}

/// Owns the single live toast.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Instance>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows `notification`, replacing any toast already on screen.
    ///
    /// The replaced toast disappears at once, without its leave transition.
    /// Returns the timers that drive the new toast.
    pub fn notify(&mut self, notification: Notification) -> Vec<Timer> {
        self.log(&notification);

        styles::ensure_installed();

        let id = notification.id();
        self.current = Some(Instance {
            notification,
            phase: Phase::Entering,
            phase_started: Instant::now(),
        });

        vec![
            Timer {
                delay: NOTIFICATION_TRANSITION,
                message: Message::EnterFinished(id),
            },
            Timer {
                delay: NOTIFICATION_AUTO_DISMISS,
                message: Message::AutoDismiss(id),
            },
        ]
    }

    /// Applies a lifecycle message. Returns the follow-up timer, if any.
    ///
    /// Messages naming a toast that is no longer current are ignored.
    pub fn handle_message(&mut self, message: &Message) -> Option<Timer> {
        match *message {
            Message::Dismiss(id) => {
                if self.is_current(id) {
                    if let Some(handle) = &self.diagnostics {
                        handle.log_action(UserAction::DismissNotification);
                    }
                }
                self.begin_leaving(id)
            }
            Message::AutoDismiss(id) => self.begin_leaving(id),
            Message::EnterFinished(id) => {
                if let Some(instance) = self.current_mut(id) {
                    if instance.phase == Phase::Entering {
                        instance.enter_phase(Phase::Visible);
                    }
                }
                None
            }
            Message::Remove(id) => {
                if self
                    .current
                    .as_ref()
                    .is_some_and(|i| i.notification.id() == id && i.phase == Phase::Leaving)
                {
                    self.current = None;
                }
                None
            }
        }
    }

    /// Returns the toast on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Instance> {
        self.current.as_ref()
    }

    /// Returns whether a transition is running and needs animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|i| i.phase != Phase::Visible)
    }

    fn begin_leaving(&mut self, id: NotificationId) -> Option<Timer> {
        let instance = self.current_mut(id)?;
        if instance.phase == Phase::Leaving {
            return None;
        }
        instance.enter_phase(Phase::Leaving);
        Some(Timer {
            delay: NOTIFICATION_TRANSITION,
            message: Message::Remove(id),
        })
    }

    fn is_current(&self, id: NotificationId) -> bool {
        self.current
            .as_ref()
            .is_some_and(|i| i.notification.id() == id)
    }

    fn current_mut(&mut self, id: NotificationId) -> Option<&mut Instance> {
        self.current
            .as_mut()
            .filter(|i| i.notification.id() == id)
    }

    /// Records typed notifications in diagnostics. Untyped ones are left to
    /// the caller, which usually has more detail to log.
    fn log(&self, notification: &Notification) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        let summary = match notification.message() {
            MessageText::Key(key) => key.clone(),
            MessageText::Literal(text) => text.clone(),
        };

        if let Some(warning_type) = notification.warning_type() {
            handle.log_warning(WarningEvent::new(warning_type, summary));
        } else if let Some(error_type) = notification.error_type() {
            handle.log_error(ErrorEvent::new(error_type, summary));
        }
    }
}

/// Warning toast shown when `settings.toml` could not be read.
#[must_use]
pub fn config_warning(message_key: impl Into<String>) -> Notification {
    Notification::error(message_key).with_warning_type(WarningType::ConfigLoad)
}
