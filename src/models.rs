use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One saved journal entry. Field names follow the persisted JSON document
/// (`moodEntries` entries are camelCase on disk and on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub overall_mood: String,
    pub energy_level: String,
    #[serde(default)]
    pub social_interactions: Vec<String>,
    pub stress_level: i32,
    pub primary_thoughts: String,
    #[serde(default)]
    pub gratitude: String,
    #[serde(default)]
    pub highlight: String,
    #[serde(default)]
    pub intention: String,
    pub mood_color: String,
    pub color_name: String,
    #[serde(default)]
    pub color_description: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// A selectable choice within one option category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodOption {
    pub value: String,
    pub label: String,
}

/// Color assigned to a mood key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodColor {
    pub color: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The whole local journal document. Persisted as a single JSON file and
/// rewritten in full on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JournalData {
    pub mood_entries: Vec<MoodEntry>,
    pub mood_options: BTreeMap<String, Vec<MoodOption>>,
    pub mood_colors: BTreeMap<String, MoodColor>,
}

/// Form payload for a new entry. Every field defaults so validation can
/// report all missing inputs at once instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEntryRequest {
    pub overall_mood: String,
    pub energy_level: String,
    pub social_interactions: Vec<String>,
    pub stress_level: i32,
    pub primary_thoughts: String,
    pub gratitude: String,
    pub highlight: String,
    pub intention: String,
    pub date: Option<DateTime<Utc>>,
}

/// A validated form plus its resolved mood color, ready to store.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub form: NewEntryRequest,
    pub color: MoodColor,
}

/// Partial update for an existing entry. `None` fields are left untouched;
/// the same shape serializes as the remote update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_interactions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_thoughts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gratitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intention: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_description: Option<String>,
}

impl EntryUpdate {
    pub fn apply_to(&self, entry: &mut MoodEntry) {
        if let Some(value) = &self.overall_mood {
            entry.overall_mood = value.clone();
        }
        if let Some(value) = &self.energy_level {
            entry.energy_level = value.clone();
        }
        if let Some(value) = &self.social_interactions {
            entry.social_interactions = value.clone();
        }
        if let Some(value) = self.stress_level {
            entry.stress_level = value;
        }
        if let Some(value) = &self.primary_thoughts {
            entry.primary_thoughts = value.clone();
        }
        if let Some(value) = &self.gratitude {
            entry.gratitude = value.clone();
        }
        if let Some(value) = &self.highlight {
            entry.highlight = value.clone();
        }
        if let Some(value) = &self.intention {
            entry.intention = value.clone();
        }
        if let Some(value) = &self.mood_color {
            entry.mood_color = value.clone();
        }
        if let Some(value) = &self.color_name {
            entry.color_name = value.clone();
        }
        if let Some(value) = &self.color_description {
            entry.color_description = value.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Week,
    Month,
}

/// History filter, also the query-string shape of `GET /api/entries`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryFilter {
    pub mood: Option<String>,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_entries: usize,
    pub average_stress_level: i64,
    pub most_common_mood: Option<String>,
    pub mood_distribution: BTreeMap<String, u64>,
    pub recent_trend: String,
}

/// Entries and options loaded together for the history view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub entries: Vec<MoodEntry>,
    pub options: BTreeMap<String, Vec<MoodOption>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub object_id: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub user: Option<RemoteUser>,
}

impl SessionInfo {
    pub fn guest() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }
}
