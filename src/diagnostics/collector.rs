// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction,
    WarningEvent,
};

/// Channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and `Send`, so async tasks (the mail backend, for one) can
/// carry their own copy. Sends never block: when the channel is full the
/// event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action.
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action with extra context.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    /// Logs a warning and mirrors it to stderr.
    pub fn log_warning(&self, event: WarningEvent) {
        eprintln!("[WARN] {}", event.message);
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error and mirrors it to stderr.
    pub fn log_error(&self, event: ErrorEvent) {
        eprintln!("[ERROR] {}", event.message);
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
///
/// Receives events through a channel and keeps the most recent ones in a
/// [`CircularBuffer`].
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Called from the application update loop.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Exports the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Session lengths in ms fit in u64
    fn build_report(&self) -> Report<'_> {
        let events = self
            .buffer
            .iter()
            .map(|event| ReportEvent {
                offset_ms: event.timestamp.saturating_duration_since(self.started_at).as_millis()
                    as u64,
                recorded_at: event.recorded_at,
                kind: &event.kind,
            })
            .collect::<Vec<_>>();

        Report {
            app_version: env!("CARGO_PKG_VERSION"),
            started_at: self.started_at_utc,
            event_count: events.len(),
            events,
        }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[derive(Serialize)]
struct Report<'a> {
    app_version: &'static str,
    started_at: DateTime<Utc>,
    event_count: usize,
    events: Vec<ReportEvent<'a>>,
}

#[derive(Serialize)]
struct ReportEvent<'a> {
    offset_ms: u64,
    recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    kind: &'a DiagnosticEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::ToggleMenu);
        handle.log_warning(WarningEvent::new(WarningType::ConfigLoad, "bad toml"));
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn handles_can_move_to_other_threads() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        std::thread::spawn(move || {
            handle.log_error(ErrorEvent::new(ErrorType::SubmissionFault, "timeout"));
        })
        .join()
        .expect("logging thread should not panic");

        collector.process_pending();
        assert!(matches!(
            collector.iter().next().map(|e| &e.kind),
            Some(DiagnosticEventKind::Error { .. })
        ));
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 10) {
            handle.log_action(UserAction::CloseMenu);
        }

        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn export_json_contains_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_action(UserAction::SelectArea {
            name: "Lyngdal".into(),
        });
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        assert!(json.contains("\"event_count\": 1"));
        assert!(json.contains("\"select_area\""));
        assert!(json.contains("Lyngdal"));
    }
}
