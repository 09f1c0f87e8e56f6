use crate::backend::Journal;
use crate::models::{RemoteUser, SessionInfo};

/// Session gate. An unusable or unconfigured remote means "guest", never an
/// error; view gating treats `false` as "show login".
impl Journal {
    pub async fn session(&self) -> SessionInfo {
        if let Some(remote) = self.remote_store() {
            match remote.current_user().await {
                Ok(user) => {
                    return SessionInfo {
                        authenticated: user.is_some(),
                        user,
                    };
                }
                Err(err) => self.note_session_failure(&err),
            }
        }
        SessionInfo::guest()
    }

    pub async fn current_user(&self) -> Option<RemoteUser> {
        self.session().await.user
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session().await.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, PLACEHOLDER_API_KEY, PLACEHOLDER_APPLICATION_ID};
    use crate::local_store::LocalStore;
    use std::path::PathBuf;

    fn temp_path() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "mood_journal_session_{}_{nanos}.json",
            std::process::id()
        ));
        path
    }

    #[tokio::test]
    async fn unconfigured_remote_means_guest() {
        let config = Config {
            port: 0,
            data_path: PathBuf::new(),
            server_url: "https://parseapi.back4app.com".to_string(),
            application_id: PLACEHOLDER_APPLICATION_ID.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            session_token: None,
        };
        let journal = Journal::new(&config, LocalStore::open(temp_path()).await).unwrap();

        assert!(!journal.is_authenticated().await);
        assert!(journal.current_user().await.is_none());
        let session = journal.session().await;
        assert!(!session.authenticated);
        assert!(session.user.is_none());
    }
}
