use crate::defaults;
use crate::errors::StoreError;
use crate::models::{EntryDraft, EntryUpdate, JournalData, MoodColor, MoodEntry, MoodOption};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::error;
use uuid::Uuid;

/// Journal persistence over a single JSON document. Every mutation runs a
/// locked read-modify-write and rewrites the whole file; a failed write
/// leaves the in-memory document unchanged.
pub struct LocalStore {
    path: PathBuf,
    data: Mutex<JournalData>,
}

impl LocalStore {
    /// Loads the document at `path`, seeding any absent collection with the
    /// default option and color sets.
    pub async fn open(path: PathBuf) -> Self {
        let mut data = load_document(&path).await;
        if seed_defaults(&mut data) {
            // Keep the seeded defaults on disk, matching what readers of the
            // raw file will see. Failure here is not fatal; the next
            // mutation retries the write.
            if let Err(err) = persist_document(&path, &data).await {
                error!("failed to persist seeded journal: {err}");
            }
        }
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    pub async fn get_all_entries(&self) -> Vec<MoodEntry> {
        self.data.lock().await.mood_entries.clone()
    }

    pub async fn get_entry(&self, id: &str) -> Result<MoodEntry, StoreError> {
        self.data
            .lock()
            .await
            .mood_entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Assigns a fresh id and timestamps, prepends the entry (most recent
    /// first) and persists the document.
    pub async fn create_entry(&self, draft: EntryDraft) -> Result<MoodEntry, StoreError> {
        let now = Utc::now();
        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            overall_mood: draft.form.overall_mood,
            energy_level: draft.form.energy_level,
            social_interactions: draft.form.social_interactions,
            stress_level: draft.form.stress_level,
            primary_thoughts: draft.form.primary_thoughts,
            gratitude: draft.form.gratitude,
            highlight: draft.form.highlight,
            intention: draft.form.intention,
            mood_color: draft.color.color,
            color_name: draft.color.name,
            color_description: draft.color.description,
            date: draft.form.date.unwrap_or(now),
            created_at: now,
            user_id: None,
        };

        let mut data = self.data.lock().await;
        let mut updated = data.clone();
        updated.mood_entries.insert(0, entry.clone());
        persist_document(&self.path, &updated).await?;
        *data = updated;
        Ok(entry)
    }

    pub async fn update_entry(
        &self,
        id: &str,
        update: &EntryUpdate,
    ) -> Result<MoodEntry, StoreError> {
        let mut data = self.data.lock().await;
        let mut updated = data.clone();
        let entry = updated
            .mood_entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        update.apply_to(entry);
        let entry = entry.clone();
        persist_document(&self.path, &updated).await?;
        *data = updated;
        Ok(entry)
    }

    pub async fn delete_entry(&self, id: &str) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        let mut updated = data.clone();
        let before = updated.mood_entries.len();
        updated.mood_entries.retain(|entry| entry.id != id);
        if updated.mood_entries.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        persist_document(&self.path, &updated).await?;
        *data = updated;
        Ok(())
    }

    pub async fn get_options(&self) -> BTreeMap<String, Vec<MoodOption>> {
        self.data.lock().await.mood_options.clone()
    }

    pub async fn get_colors(&self) -> BTreeMap<String, MoodColor> {
        self.data.lock().await.mood_colors.clone()
    }

    pub async fn resolve_color(&self, mood: &str) -> MoodColor {
        defaults::resolve_color(&self.data.lock().await.mood_colors, mood)
    }
}

async fn load_document(path: &Path) -> JournalData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse journal file: {err}");
                JournalData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => JournalData::default(),
        Err(err) => {
            error!("failed to read journal file: {err}");
            JournalData::default()
        }
    }
}

/// Returns true if anything was seeded.
fn seed_defaults(data: &mut JournalData) -> bool {
    let mut seeded = false;
    if data.mood_options.is_empty() {
        data.mood_options = defaults::default_options();
        seeded = true;
    }
    if data.mood_colors.is_empty() {
        data.mood_colors = defaults::default_colors();
        seeded = true;
    }
    seeded
}

async fn persist_document(path: &Path, data: &JournalData) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(data).map_err(|err| {
        error!("failed to serialize journal data: {err}");
        StoreError::LocalPersistence(err.to_string())
    })?;
    fs::write(path, payload).await.map_err(|err| {
        error!("failed to write journal file: {err}");
        StoreError::LocalPersistence(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewEntryRequest;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "mood_journal_{tag}_{}_{nanos}.json",
            std::process::id()
        ));
        path
    }

    fn draft(mood: &str, stress: i32) -> EntryDraft {
        EntryDraft {
            form: NewEntryRequest {
                overall_mood: mood.to_string(),
                energy_level: "medium".to_string(),
                stress_level: stress,
                primary_thoughts: "work".to_string(),
                ..Default::default()
            },
            color: defaults::resolve_color(&defaults::default_colors(), mood),
        }
    }

    #[tokio::test]
    async fn open_seeds_options_and_colors() {
        let store = LocalStore::open(temp_path("seed")).await;
        let options = store.get_options().await;
        assert_eq!(options["overallMood"].len(), 7);
        assert_eq!(options["primaryThoughts"].len(), 8);
        let colors = store.get_colors().await;
        assert_eq!(colors["sad"].color, "#4169E1");
        assert!(store.get_all_entries().await.is_empty());
    }

    #[tokio::test]
    async fn create_prepends_and_assigns_unique_ids() {
        let store = LocalStore::open(temp_path("create")).await;
        let first = store.create_entry(draft("happy", 3)).await.unwrap();
        let before = store.get_all_entries().await.len();
        let second = store.create_entry(draft("sad", 7)).await.unwrap();

        let entries = store.get_all_entries().await;
        assert_eq!(entries.len(), before + 1);
        assert_eq!(entries[0].id, second.id);
        assert_ne!(first.id, second.id);
        assert_eq!(entries[0].mood_color, "#4169E1");
        assert_eq!(entries[0].color_name, "Royal Blue");
    }

    #[tokio::test]
    async fn document_survives_reopen() {
        let path = temp_path("reopen");
        let created = {
            let store = LocalStore::open(path.clone()).await;
            store.create_entry(draft("content", 2)).await.unwrap()
        };

        let store = LocalStore::open(path).await;
        let entries = store.get_all_entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, created.id);
        assert_eq!(entries[0].overall_mood, "content");
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let store = LocalStore::open(temp_path("update")).await;
        let created = store.create_entry(draft("neutral", 5)).await.unwrap();

        let update = EntryUpdate {
            stress_level: Some(9),
            gratitude: Some("a quiet evening".to_string()),
            ..Default::default()
        };
        let updated = store.update_entry(&created.id, &update).await.unwrap();
        assert_eq!(updated.stress_level, 9);
        assert_eq!(updated.gratitude, "a quiet evening");
        assert_eq!(updated.overall_mood, "neutral");
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn delete_removes_the_entry() {
        let store = LocalStore::open(temp_path("delete")).await;
        let created = store.create_entry(draft("anxious", 8)).await.unwrap();
        store.delete_entry(&created.id).await.unwrap();
        assert!(store.get_all_entries().await.is_empty());
        assert!(matches!(
            store.get_entry(&created.id).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_entry(&created.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn failed_write_reports_error_and_keeps_memory_unchanged() {
        // A directory at the document path makes every write fail.
        let path = temp_path("unwritable");
        std::fs::create_dir_all(&path).unwrap();
        let store = LocalStore::open(path).await;

        let err = store.create_entry(draft("happy", 3)).await.unwrap_err();
        assert!(matches!(err, StoreError::LocalPersistence(_)));
        assert!(store.get_all_entries().await.is_empty());

        // The store is still seeded and usable for reads.
        assert_eq!(store.get_options().await["overallMood"].len(), 7);
    }

    #[tokio::test]
    async fn resolve_color_falls_back_to_gray() {
        let store = LocalStore::open(temp_path("color")).await;
        assert_eq!(store.resolve_color("ecstatic").await.color, "#FF69B4");
        assert_eq!(store.resolve_color("mystified").await.color, "#808080");
    }
}
