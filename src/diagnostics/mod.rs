// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting an in-memory activity log.
//!
//! Components hold a cheap [`DiagnosticsHandle`] and report user actions,
//! warnings, and errors through a bounded channel. The
//! [`DiagnosticsCollector`] owned by the application drains that channel into
//! a memory-bounded [`CircularBuffer`] on every update and can export the
//! collected events as a JSON report.
//!
//! Warnings and errors are mirrored to stderr when they are logged.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
