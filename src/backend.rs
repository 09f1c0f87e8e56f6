use crate::config::Config;
use crate::errors::StoreError;
use crate::local_store::LocalStore;
use crate::models::{
    EntryDraft, EntryUpdate, MoodColor, MoodEntry, MoodOption, Statistics,
};
use crate::remote_store::RemoteStore;
use crate::stats::build_statistics;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Backend selector: exposes one operation set and answers each call from
/// the remote store when it is configured and usable, falling back to the
/// local journal otherwise. Remote failures never reach the caller.
pub struct Journal {
    remote: Option<RemoteStore>,
    local: LocalStore,
    /// Set once an expected remote failure (unconfigured / rejected) is
    /// seen, so later calls skip the doomed request. There is no
    /// invalidation during normal operation; `reset_remote_probe` exists
    /// for tests and operator-driven restarts.
    remote_unusable: AtomicBool,
}

impl Journal {
    pub fn new(config: &Config, local: LocalStore) -> Result<Self, StoreError> {
        let remote = RemoteStore::from_config(config)?;
        if remote.is_none() {
            info!("remote backend not configured; journal entries stay on this device");
        }
        Ok(Self {
            remote,
            local,
            remote_unusable: AtomicBool::new(false),
        })
    }

    /// Clears the memoized remote-unusable flag.
    pub fn reset_remote_probe(&self) {
        self.remote_unusable.store(false, Ordering::Relaxed);
    }

    fn remote(&self) -> Option<&RemoteStore> {
        if self.remote_unusable.load(Ordering::Relaxed) {
            return None;
        }
        self.remote.as_ref()
    }

    fn note_remote_failure(&self, operation: &str, err: &StoreError) {
        if err.is_expected() {
            debug!("remote {operation} unavailable, using local journal: {err}");
            self.remote_unusable.store(true, Ordering::Relaxed);
        } else if matches!(err, StoreError::NotFound(_)) {
            debug!("remote {operation} found nothing, trying local journal");
        } else {
            warn!("remote {operation} failed, falling back to local journal: {err}");
        }
    }

    pub async fn get_all_entries(&self) -> Result<Vec<MoodEntry>, StoreError> {
        if let Some(remote) = self.remote() {
            match remote.get_all_entries().await {
                Ok(entries) => return Ok(entries),
                Err(err) => self.note_remote_failure("get_all_entries", &err),
            }
        }
        Ok(self.local.get_all_entries().await)
    }

    pub async fn get_entry(&self, id: &str) -> Result<MoodEntry, StoreError> {
        if let Some(remote) = self.remote() {
            match remote.get_entry(id).await {
                Ok(entry) => return Ok(entry),
                Err(err) => self.note_remote_failure("get_entry", &err),
            }
        }
        self.local.get_entry(id).await
    }

    pub async fn create_entry(&self, draft: EntryDraft) -> Result<MoodEntry, StoreError> {
        if let Some(remote) = self.remote() {
            // Entries created while signed in are owned by that user.
            let result = match remote.current_user().await {
                Ok(user) => {
                    remote
                        .create_entry(&draft, user.as_ref().map(|u| u.object_id.as_str()))
                        .await
                }
                Err(err) => Err(err),
            };
            match result {
                Ok(entry) => return Ok(entry),
                Err(err) => self.note_remote_failure("create_entry", &err),
            }
        }
        self.local.create_entry(draft).await
    }

    pub async fn update_entry(
        &self,
        id: &str,
        update: &EntryUpdate,
    ) -> Result<MoodEntry, StoreError> {
        if let Some(remote) = self.remote() {
            match remote.update_entry(id, update).await {
                Ok(entry) => return Ok(entry),
                Err(err) => self.note_remote_failure("update_entry", &err),
            }
        }
        self.local.update_entry(id, update).await
    }

    pub async fn delete_entry(&self, id: &str) -> Result<(), StoreError> {
        if let Some(remote) = self.remote() {
            match remote.delete_entry(id).await {
                Ok(()) => return Ok(()),
                Err(err) => self.note_remote_failure("delete_entry", &err),
            }
        }
        self.local.delete_entry(id).await
    }

    pub async fn get_options(&self) -> Result<BTreeMap<String, Vec<MoodOption>>, StoreError> {
        if let Some(remote) = self.remote() {
            match remote.get_options().await {
                Ok(options) => return Ok(options),
                Err(err) => self.note_remote_failure("get_options", &err),
            }
        }
        Ok(self.local.get_options().await)
    }

    pub async fn get_colors(&self) -> Result<BTreeMap<String, MoodColor>, StoreError> {
        if let Some(remote) = self.remote() {
            match remote.get_colors().await {
                Ok(colors) => return Ok(colors),
                Err(err) => self.note_remote_failure("get_colors", &err),
            }
        }
        Ok(self.local.get_colors().await)
    }

    pub async fn resolve_color(&self, mood: &str) -> Result<MoodColor, StoreError> {
        if let Some(remote) = self.remote() {
            match remote.resolve_color(mood).await {
                Ok(color) => return Ok(color),
                Err(err) => self.note_remote_failure("resolve_color", &err),
            }
        }
        Ok(self.local.resolve_color(mood).await)
    }

    /// Aggregates over whichever store answers the entry query.
    pub async fn statistics(&self) -> Result<Statistics, StoreError> {
        let entries = self.get_all_entries().await?;
        Ok(build_statistics(&entries))
    }

    pub(crate) fn remote_store(&self) -> Option<&RemoteStore> {
        self.remote()
    }

    pub(crate) fn note_session_failure(&self, err: &StoreError) {
        self.note_remote_failure("current_user", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PLACEHOLDER_API_KEY, PLACEHOLDER_APPLICATION_ID};
    use crate::defaults;
    use crate::models::NewEntryRequest;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn unconfigured() -> Config {
        Config {
            port: 0,
            data_path: PathBuf::new(),
            server_url: "https://parseapi.back4app.com".to_string(),
            application_id: PLACEHOLDER_APPLICATION_ID.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            session_token: None,
        }
    }

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "mood_journal_backend_{tag}_{}_{nanos}.json",
            std::process::id()
        ));
        path
    }

    async fn journal(tag: &str) -> Journal {
        let local = LocalStore::open(temp_path(tag)).await;
        Journal::new(&unconfigured(), local).unwrap()
    }

    fn configured(server_url: &str) -> Config {
        Config {
            port: 0,
            data_path: PathBuf::new(),
            server_url: server_url.to_string(),
            application_id: "app-id-123".to_string(),
            api_key: "rest-key-456".to_string(),
            session_token: Some("r:token".to_string()),
        }
    }

    /// Minimal remote stand-in: answers every request with `status_line` and
    /// an empty body, counting the requests it served.
    async fn stub_remote(status_line: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            request.extend_from_slice(&buf[..n]);
                            if request.windows(4).any(|window| window == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        (format!("http://{addr}"), hits)
    }

    fn draft(mood: &str, stress: i32) -> EntryDraft {
        EntryDraft {
            form: NewEntryRequest {
                overall_mood: mood.to_string(),
                energy_level: "high".to_string(),
                stress_level: stress,
                primary_thoughts: "future".to_string(),
                ..Default::default()
            },
            color: defaults::resolve_color(&defaults::default_colors(), mood),
        }
    }

    #[tokio::test]
    async fn unconfigured_remote_answers_from_local() {
        let journal = journal("fallback").await;
        assert!(journal.get_all_entries().await.unwrap().is_empty());

        let created = journal.create_entry(draft("happy", 4)).await.unwrap();
        let entries = journal.get_all_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, created.id);
        assert_eq!(entries[0].mood_color, "#FFD700");
    }

    #[tokio::test]
    async fn statistics_follow_the_selected_store() {
        let journal = journal("stats").await;
        for (mood, stress) in [("happy", 2), ("happy", 4), ("sad", 6), ("happy", 8)] {
            journal.create_entry(draft(mood, stress)).await.unwrap();
        }

        let stats = journal.statistics().await.unwrap();
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.average_stress_level, 5);
        assert_eq!(stats.most_common_mood.as_deref(), Some("happy"));
        assert_eq!(stats.mood_distribution["happy"], 3);
    }

    #[tokio::test]
    async fn options_and_colors_come_seeded() {
        let journal = journal("seeded").await;
        let options = journal.get_options().await.unwrap();
        assert_eq!(options["overallMood"].len(), 7);
        let color = journal.resolve_color("frustrated").await.unwrap();
        assert_eq!(color.color, "#FF6347");
        let color = journal.resolve_color("unheard-of").await.unwrap();
        assert_eq!(color.color, "#808080");
    }

    #[tokio::test]
    async fn remote_probe_reset_is_idempotent_without_a_remote() {
        let journal = journal("probe").await;
        journal.reset_remote_probe();
        assert!(journal.get_all_entries().await.is_ok());
    }

    #[tokio::test]
    async fn rejected_remote_is_memoized_until_reset() {
        let (server_url, hits) = stub_remote("401 Unauthorized").await;
        let local = LocalStore::open(temp_path("rejected")).await;
        let seeded = local.create_entry(draft("happy", 4)).await.unwrap();
        let journal = Journal::new(&configured(&server_url), local).unwrap();

        // First call hits the remote, gets rejected and answers locally.
        let entries = journal.get_all_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, seeded.id);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // The rejection is memoized; later calls skip the remote entirely.
        let entries = journal.get_all_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!journal.is_authenticated().await);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // Clearing the memo re-probes the remote.
        journal.reset_remote_probe();
        let entries = journal.get_all_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn server_error_falls_back_without_memoizing() {
        let (server_url, hits) = stub_remote("500 Internal Server Error").await;
        let local = LocalStore::open(temp_path("server_error")).await;
        let journal = Journal::new(&configured(&server_url), local).unwrap();

        // Both calls answer locally and both retry the remote; a transient
        // failure does not flip the remote-unusable flag.
        assert!(journal.get_all_entries().await.unwrap().is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(journal.get_all_entries().await.unwrap().is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unreachable_remote_still_answers_locally() {
        // Bind a port and release it so the connection is refused.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let local = LocalStore::open(temp_path("unreachable")).await;
        let journal = Journal::new(&configured(&server_url), local).unwrap();

        let created = journal.create_entry(draft("content", 2)).await.unwrap();
        let entries = journal.get_all_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, created.id);
    }
}
