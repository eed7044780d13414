// SPDX-License-Identifier: MPL-2.0
//! Data exchanged with the mail backend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat `field name → value` mapping serialized from the contact form.
///
/// Keys are kept sorted so the payload serializes deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Answer from the mail backend.
///
/// Shaped like the backend's JSON reply: `{"success": true}` or
/// `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome {
    #[must_use]
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    #[must_use]
    pub fn failure(message: Option<String>) -> Self {
        Self {
            success: false,
            message,
        }
    }

    /// Failure detail suitable for display, ignoring blank messages.
    #[must_use]
    pub fn failure_detail(&self) -> Option<&str> {
        if self.success {
            return None;
        }
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_as_flat_object() {
        let payload: Payload = [("navn", "Ola"), ("epost", "ola@example.no")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&payload).expect("payload serializes");
        assert_eq!(json, r#"{"epost":"ola@example.no","navn":"Ola"}"#);
    }

    #[test]
    fn payload_insert_replaces_existing_value() {
        let mut payload = Payload::new();
        payload.insert("navn", "Ola");
        payload.insert("navn", "Kari");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("navn"), Some("Kari"));
    }

    #[test]
    fn outcome_parses_backend_reply_without_message() {
        let outcome: Outcome = serde_json::from_str(r#"{"success":true}"#).expect("valid json");
        assert_eq!(outcome, Outcome::success());
    }

    #[test]
    fn failure_detail_ignores_blank_messages() {
        assert_eq!(Outcome::failure(Some("  ".into())).failure_detail(), None);
        assert_eq!(Outcome::failure(None).failure_detail(), None);
        assert_eq!(
            Outcome::failure(Some("Kvote brukt opp".into())).failure_detail(),
            Some("Kvote brukt opp")
        );
        assert_eq!(Outcome::success().failure_detail(), None);
    }
}
