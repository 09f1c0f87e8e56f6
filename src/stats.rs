use crate::models::{MoodEntry, Statistics};
use std::collections::BTreeMap;

/// No trend analysis is implemented yet; the field is a fixed placeholder.
const RECENT_TREND: &str = "stable";

/// Aggregates a slice of entries into the summary shown on the home view.
/// Pure over its input; works the same over local and remote entries.
pub fn build_statistics(entries: &[MoodEntry]) -> Statistics {
    if entries.is_empty() {
        return Statistics {
            total_entries: 0,
            average_stress_level: 0,
            most_common_mood: None,
            mood_distribution: BTreeMap::new(),
            recent_trend: RECENT_TREND.to_string(),
        };
    }

    let total_stress: i64 = entries.iter().map(|entry| i64::from(entry.stress_level)).sum();
    let average_stress_level = (total_stress as f64 / entries.len() as f64).round() as i64;

    // Single pass; first_seen keeps the order moods first appear so the
    // most-common tie-break is deterministic (first occurrence wins).
    let mut mood_distribution: BTreeMap<String, u64> = BTreeMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for entry in entries {
        if !mood_distribution.contains_key(&entry.overall_mood) {
            first_seen.push(entry.overall_mood.clone());
        }
        *mood_distribution.entry(entry.overall_mood.clone()).or_insert(0) += 1;
    }

    let mut most_common_mood = None;
    let mut best = 0u64;
    for mood in &first_seen {
        let count = mood_distribution[mood];
        if count > best {
            best = count;
            most_common_mood = Some(mood.clone());
        }
    }

    Statistics {
        total_entries: entries.len(),
        average_stress_level,
        most_common_mood,
        mood_distribution,
        recent_trend: RECENT_TREND.to_string(),
    }
}
