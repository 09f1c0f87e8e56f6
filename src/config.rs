use std::{env, path::PathBuf};

/// Placeholder credentials shipped in deployment templates; treated as "not
/// configured" so a fresh checkout runs on the local journal alone.
pub const PLACEHOLDER_APPLICATION_ID: &str = "YOUR_APPLICATION_ID";
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

const DEFAULT_SERVER_URL: &str = "https://parseapi.back4app.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub server_url: String,
    pub application_id: String,
    pub api_key: String,
    pub session_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(8080),
            data_path: env::var("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/journal.json")),
            server_url: env::var("BACKEND_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
            application_id: env::var("BACKEND_APPLICATION_ID")
                .unwrap_or_else(|_| PLACEHOLDER_APPLICATION_ID.to_string()),
            api_key: env::var("BACKEND_API_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            session_token: env::var("BACKEND_SESSION_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
        }
    }

    /// The remote store is usable only when both credentials are set to real
    /// values. Placeholders count as unset.
    pub fn is_remote_configured(&self) -> bool {
        !self.application_id.is_empty()
            && self.application_id != PLACEHOLDER_APPLICATION_ID
            && !self.api_key.is_empty()
            && self.api_key != PLACEHOLDER_API_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(application_id: &str, api_key: &str) -> Config {
        Config {
            port: 8080,
            data_path: PathBuf::from("data/journal.json"),
            server_url: DEFAULT_SERVER_URL.to_string(),
            application_id: application_id.to_string(),
            api_key: api_key.to_string(),
            session_token: None,
        }
    }

    #[test]
    fn placeholders_count_as_unconfigured() {
        assert!(!config(PLACEHOLDER_APPLICATION_ID, PLACEHOLDER_API_KEY).is_remote_configured());
        assert!(!config("", "").is_remote_configured());
        assert!(!config("abc123", PLACEHOLDER_API_KEY).is_remote_configured());
        assert!(!config(PLACEHOLDER_APPLICATION_ID, "secret").is_remote_configured());
    }

    #[test]
    fn real_credentials_enable_the_remote() {
        assert!(config("abc123", "secret").is_remote_configured());
    }
}
