use crate::models::{DateRange, EntryFilter, MoodEntry};
use chrono::{DateTime, Duration, Utc};

/// Narrows entries by exact mood match and/or a relative date window,
/// preserving input order. The cutoff is computed from the moment the
/// filter runs, using fixed day counts (a "month" is 30 days).
pub fn filter_entries(entries: &[MoodEntry], filter: &EntryFilter) -> Vec<MoodEntry> {
    filter_entries_at(Utc::now(), entries, filter)
}

pub fn filter_entries_at(
    now: DateTime<Utc>,
    entries: &[MoodEntry],
    filter: &EntryFilter,
) -> Vec<MoodEntry> {
    let mood = filter.mood.as_deref().filter(|value| !value.is_empty());
    let cutoff = match filter.date_range {
        DateRange::All => None,
        DateRange::Week => Some(now - Duration::days(7)),
        DateRange::Month => Some(now - Duration::days(30)),
    };

    entries
        .iter()
        .filter(|entry| mood.is_none_or(|value| entry.overall_mood == value))
        .filter(|entry| cutoff.is_none_or(|cutoff| entry.date >= cutoff))
        .cloned()
        .collect()
}
