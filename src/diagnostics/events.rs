// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions worth keeping in the activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Navigation
    // ==========================================================================
    /// Open or close the navigation menu.
    ToggleMenu,

    /// Close the navigation menu (link click or Escape).
    CloseMenu,

    /// Follow an in-page anchor.
    FollowAnchor {
        /// Anchor target without the leading `#`.
        target: String,
    },

    /// Select a marker on the service area map.
    SelectArea {
        /// Area name carried by the marker.
        name: String,
    },

    // ==========================================================================
    // Contact Form
    // ==========================================================================
    /// Submit the contact form.
    SubmitContactForm,

    /// Close a toast notification by hand.
    DismissNotification,
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::ToggleMenu => write!(f, "Toggle menu"),
            UserAction::CloseMenu => write!(f, "Close menu"),
            UserAction::FollowAnchor { target } => write!(f, "Follow anchor #{target}"),
            UserAction::SelectArea { name } => write!(f, "Selected area: {name}"),
            UserAction::SubmitContactForm => write!(f, "Submit contact form"),
            UserAction::DismissNotification => write!(f, "Dismiss notification"),
        }
    }
}

/// Category of a logged warning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The settings file could not be read; defaults are in use.
    ConfigLoad,
    /// The configured mail backend could not be built; the simulated one
    /// stands in.
    BackendUnavailable,
}

/// Category of a logged error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The contact submission call raised a fault.
    SubmissionFault,
    /// The mail backend answered with `success: false`.
    SubmissionRejected,
}

/// A warning with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamps.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for relative offsets).
    pub timestamp: Instant,
    /// When the event occurred (wall clock for the exported report).
    pub recorded_at: DateTime<Utc>,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Optional additional context (payload summary, section id, ...).
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_stamped_now() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::ToggleMenu,
            details: None,
        });
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Instant::now());
    }

    #[test]
    fn event_kind_serializes_with_type_tag() {
        let kind = DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::SubmissionFault, "timeout"),
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("\"error_type\":\"submission_fault\""));
    }

    #[test]
    fn select_area_displays_like_the_log_line() {
        let action = UserAction::SelectArea {
            name: "Kvinesdal".into(),
        };
        assert_eq!(action.to_string(), "Selected area: Kvinesdal");
    }

    #[test]
    fn user_action_round_trips_through_json() {
        let json = r#"{"type":"user_action","action":{"action":"follow_anchor","target":"kontakt"}}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::FollowAnchor {
                    target: "kontakt".into()
                },
                details: None,
            }
        );
    }
}
