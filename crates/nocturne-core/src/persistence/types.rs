//! Persistence data types.
//!
//! # Data Model Overview
//!
//! The journal persists a single entity, [`DreamEntry`], as a JSON array in
//! `dreams.json`:
//!
//! ```json
//! [
//!   {
//!     "id": "0b24d2e4-7f6e-4f3a-9c41-8a2f3b1d5c60",
//!     "date": "2024-03-01T10:00:00Z",
//!     "dreamText": "flew over a city",
//!     "selectedSymbol": "Flying",
//!     "selectedMood": "Joyful",
//!     "moodIntensity": 3.0
//!   }
//! ]
//! ```
//!
//! Field names are stable across versions; there is no version marker and no
//! migration support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single journaled dream.
///
/// `id` and `occurred_at` are assigned at creation and never change; editing
/// an existing day's entry reuses both and replaces the mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamEntry {
    /// Unique entry identifier.
    pub id: Uuid,

    /// The instant this entry is associated with.
    #[serde(rename = "date")]
    pub occurred_at: DateTime<Utc>,

    /// Free-form narrative text.
    #[serde(rename = "dreamText")]
    pub text: String,

    /// Symbol name from the fixed symbol catalog.
    #[serde(rename = "selectedSymbol", default)]
    pub symbol: Option<String>,

    /// Mood label derived from `mood_intensity`.
    #[serde(rename = "selectedMood", default)]
    pub mood: Option<String>,

    /// Mood level on the 0..=4 scale. The store does not validate the range;
    /// the input UI constrains it.
    pub mood_intensity: f64,
}

impl DreamEntry {
    /// Create a fresh entry with a new id and the current timestamp.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            text: text.into(),
            symbol: None,
            mood: None,
            mood_intensity: 0.0,
        }
    }

    /// Produce a replacement for an existing entry, keeping its identity.
    ///
    /// Used by the edit flow: the original `id` and `occurred_at` carry over,
    /// everything else is taken from the new values.
    pub fn edited(
        &self,
        text: impl Into<String>,
        symbol: Option<String>,
        mood: Option<String>,
        mood_intensity: f64,
    ) -> Self {
        Self {
            id: self.id,
            occurred_at: self.occurred_at,
            text: text.into(),
            symbol,
            mood,
            mood_intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_unique_ids() {
        let a = DreamEntry::new("first");
        let b = DreamEntry::new("second");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn edited_preserves_identity() {
        let original = DreamEntry::new("draft");
        let replacement = original.edited(
            "flew over a city",
            Some("Flying".to_string()),
            Some("Joyful".to_string()),
            3.0,
        );

        assert_eq!(replacement.id, original.id);
        assert_eq!(replacement.occurred_at, original.occurred_at);
        assert_eq!(replacement.text, "flew over a city");
        assert_eq!(replacement.symbol.as_deref(), Some("Flying"));
        assert_eq!(replacement.mood_intensity, 3.0);
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let entry = DreamEntry::new("night swim");
        let json = serde_json::to_value(&entry).unwrap();

        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("date"));
        assert!(obj.contains_key("dreamText"));
        assert!(obj.contains_key("selectedSymbol"));
        assert!(obj.contains_key("selectedMood"));
        assert!(obj.contains_key("moodIntensity"));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "id": "0b24d2e4-7f6e-4f3a-9c41-8a2f3b1d5c60",
            "date": "2024-03-01T10:00:00Z",
            "dreamText": "flew over a city",
            "moodIntensity": 3.0
        }"#;

        let entry: DreamEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.text, "flew over a city");
        assert!(entry.symbol.is_none());
        assert!(entry.mood.is_none());
    }
}
