use crate::config::Config;
use crate::defaults;
use crate::errors::StoreError;
use crate::models::{
    EntryDraft, EntryUpdate, MoodColor, MoodEntry, MoodOption, RemoteUser,
};
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;

/// The reference deployment has no request timeout; this is a deliberate
/// hardening deviation so a hung remote cannot block a caller forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over a Parse-style object storage API (Back4App). Records
/// live in three classes (MoodEntry, MoodOptions, MoodColors) plus the
/// built-in user session endpoint.
pub struct RemoteStore {
    client: Client,
    server_url: String,
    application_id: String,
    api_key: String,
    session_token: Option<String>,
}

impl RemoteStore {
    /// Builds a client when the config carries real credentials; placeholder
    /// credentials yield `None` and the caller stays on the local journal.
    pub fn from_config(config: &Config) -> Result<Option<Self>, StoreError> {
        if !config.is_remote_configured() {
            return Ok(None);
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Some(Self {
            client,
            server_url: config.server_url.trim_end_matches('/').to_string(),
            application_id: config.application_id.clone(),
            api_key: config.api_key.clone(),
            session_token: config.session_token.clone(),
        }))
    }

    pub async fn get_all_entries(&self) -> Result<Vec<MoodEntry>, StoreError> {
        let response = self
            .request(Method::GET, "classes/MoodEntry")
            .query(&[("order", "-createdAt")])
            .send()
            .await?;
        let envelope: ResultsEnvelope<RemoteEntry> =
            check(response, "MoodEntry").await?.json().await?;
        Ok(envelope.results.into_iter().map(MoodEntry::from).collect())
    }

    pub async fn get_entry(&self, id: &str) -> Result<MoodEntry, StoreError> {
        let response = self
            .request(Method::GET, &format!("classes/MoodEntry/{id}"))
            .send()
            .await?;
        let record: RemoteEntry = check(response, id).await?.json().await?;
        Ok(record.into())
    }

    pub async fn create_entry(
        &self,
        draft: &EntryDraft,
        user_id: Option<&str>,
    ) -> Result<MoodEntry, StoreError> {
        let date = draft.form.date.unwrap_or_else(Utc::now);
        let mut body = json!({
            "overallMood": draft.form.overall_mood,
            "energyLevel": draft.form.energy_level,
            "socialInteractions": draft.form.social_interactions,
            "stressLevel": draft.form.stress_level,
            "primaryThoughts": draft.form.primary_thoughts,
            "gratitude": draft.form.gratitude,
            "highlight": draft.form.highlight,
            "intention": draft.form.intention,
            "moodColor": draft.color.color,
            "colorName": draft.color.name,
            "colorDescription": draft.color.description,
            "date": ParseDate::new(date),
        });
        if let Some(user_id) = user_id {
            body["user"] = json!(Pointer::user(user_id));
        }

        let response = self
            .request(Method::POST, "classes/MoodEntry")
            .json(&body)
            .send()
            .await?;
        let created: CreateResponse = check(response, "MoodEntry").await?.json().await?;

        Ok(MoodEntry {
            id: created.object_id,
            overall_mood: draft.form.overall_mood.clone(),
            energy_level: draft.form.energy_level.clone(),
            social_interactions: draft.form.social_interactions.clone(),
            stress_level: draft.form.stress_level,
            primary_thoughts: draft.form.primary_thoughts.clone(),
            gratitude: draft.form.gratitude.clone(),
            highlight: draft.form.highlight.clone(),
            intention: draft.form.intention.clone(),
            mood_color: draft.color.color.clone(),
            color_name: draft.color.name.clone(),
            color_description: draft.color.description.clone(),
            date,
            created_at: created.created_at,
            user_id: user_id.map(str::to_string),
        })
    }

    pub async fn update_entry(
        &self,
        id: &str,
        update: &EntryUpdate,
    ) -> Result<MoodEntry, StoreError> {
        let response = self
            .request(Method::PUT, &format!("classes/MoodEntry/{id}"))
            .json(update)
            .send()
            .await?;
        check(response, id).await?;
        self.get_entry(id).await
    }

    pub async fn delete_entry(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE, &format!("classes/MoodEntry/{id}"))
            .send()
            .await?;
        check(response, id).await?;
        Ok(())
    }

    /// Remote option records are (category, value, label, order) rows; an
    /// empty class falls back to the built-in defaults.
    pub async fn get_options(&self) -> Result<BTreeMap<String, Vec<MoodOption>>, StoreError> {
        let response = self
            .request(Method::GET, "classes/MoodOptions")
            .query(&[("order", "order")])
            .send()
            .await?;
        let envelope: ResultsEnvelope<RemoteOption> =
            check(response, "MoodOptions").await?.json().await?;

        if envelope.results.is_empty() {
            return Ok(defaults::default_options());
        }

        let mut options: BTreeMap<String, Vec<MoodOption>> = BTreeMap::new();
        for record in envelope.results {
            options.entry(record.category).or_default().push(MoodOption {
                value: record.value,
                label: record.label,
            });
        }
        Ok(options)
    }

    pub async fn get_colors(&self) -> Result<BTreeMap<String, MoodColor>, StoreError> {
        let response = self
            .request(Method::GET, "classes/MoodColors")
            .send()
            .await?;
        let envelope: ResultsEnvelope<RemoteColor> =
            check(response, "MoodColors").await?.json().await?;

        if envelope.results.is_empty() {
            return Ok(defaults::default_colors());
        }

        let mut colors = BTreeMap::new();
        for record in envelope.results {
            colors.insert(
                record.mood,
                MoodColor {
                    color: record.color,
                    name: record.name,
                    description: record.description,
                },
            );
        }
        Ok(colors)
    }

    pub async fn resolve_color(&self, mood: &str) -> Result<MoodColor, StoreError> {
        let colors = self.get_colors().await?;
        Ok(defaults::resolve_color(&colors, mood))
    }

    /// The identity behind the configured session token, or `None` when no
    /// token is set.
    pub async fn current_user(&self) -> Result<Option<RemoteUser>, StoreError> {
        let Some(token) = &self.session_token else {
            return Ok(None);
        };
        let response = self
            .request(Method::GET, "users/me")
            .header("X-Parse-Session-Token", token)
            .send()
            .await?;
        let user: RemoteUser = check(response, "users/me").await?.json().await?;
        Ok(Some(user))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{path}", self.server_url))
            .header("X-Parse-Application-Id", &self.application_id)
            .header("X-Parse-REST-API-Key", &self.api_key)
    }
}

async fn check(response: reqwest::Response, resource: &str) -> Result<reqwest::Response, StoreError> {
    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::RemoteUnauthorized),
        StatusCode::NOT_FOUND => Err(StoreError::NotFound(resource.to_string())),
        _ => Ok(response.error_for_status()?),
    }
}

#[derive(Debug, Deserialize)]
struct ResultsEnvelope<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateResponse {
    object_id: String,
    created_at: DateTime<Utc>,
}

/// Parse encodes Date columns as `{"__type": "Date", "iso": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
struct ParseDate {
    #[serde(rename = "__type")]
    kind: String,
    iso: DateTime<Utc>,
}

impl ParseDate {
    fn new(iso: DateTime<Utc>) -> Self {
        Self {
            kind: "Date".to_string(),
            iso,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pointer {
    #[serde(rename = "__type")]
    kind: String,
    class_name: String,
    object_id: String,
}

impl Pointer {
    fn user(object_id: &str) -> Self {
        Self {
            kind: "Pointer".to_string(),
            class_name: "_User".to_string(),
            object_id: object_id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteEntry {
    object_id: String,
    overall_mood: String,
    energy_level: String,
    #[serde(default)]
    social_interactions: Vec<String>,
    stress_level: i32,
    primary_thoughts: String,
    #[serde(default)]
    gratitude: String,
    #[serde(default)]
    highlight: String,
    #[serde(default)]
    intention: String,
    mood_color: String,
    color_name: String,
    #[serde(default)]
    color_description: String,
    #[serde(default)]
    date: Option<ParseDate>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    user: Option<Pointer>,
}

impl From<RemoteEntry> for MoodEntry {
    fn from(record: RemoteEntry) -> Self {
        Self {
            id: record.object_id,
            overall_mood: record.overall_mood,
            energy_level: record.energy_level,
            social_interactions: record.social_interactions,
            stress_level: record.stress_level,
            primary_thoughts: record.primary_thoughts,
            gratitude: record.gratitude,
            highlight: record.highlight,
            intention: record.intention,
            mood_color: record.mood_color,
            color_name: record.color_name,
            color_description: record.color_description,
            date: record.date.map(|date| date.iso).unwrap_or(record.created_at),
            created_at: record.created_at,
            user_id: record.user.map(|pointer| pointer.object_id),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RemoteOption {
    category: String,
    value: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct RemoteColor {
    mood: String,
    color: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_wire_shape() {
        let date = "2026-08-20T02:06:57.931Z".parse().unwrap();
        let value = serde_json::to_value(ParseDate::new(date)).unwrap();
        assert_eq!(value["__type"], "Date");
        assert_eq!(value["iso"], "2026-08-20T02:06:57.931Z");
    }

    #[test]
    fn user_pointer_wire_shape() {
        let value = serde_json::to_value(Pointer::user("u1")).unwrap();
        assert_eq!(value["__type"], "Pointer");
        assert_eq!(value["className"], "_User");
        assert_eq!(value["objectId"], "u1");
    }

    #[test]
    fn remote_entry_maps_to_mood_entry() {
        let record: RemoteEntry = serde_json::from_value(serde_json::json!({
            "objectId": "abc",
            "overallMood": "happy",
            "energyLevel": "high",
            "stressLevel": 3,
            "primaryThoughts": "creative",
            "moodColor": "#FFD700",
            "colorName": "Golden Yellow",
            "date": { "__type": "Date", "iso": "2026-08-19T08:00:00Z" },
            "createdAt": "2026-08-19T08:00:01Z",
            "user": { "__type": "Pointer", "className": "_User", "objectId": "u9" }
        }))
        .unwrap();

        let entry = MoodEntry::from(record);
        assert_eq!(entry.id, "abc");
        assert_eq!(entry.user_id.as_deref(), Some("u9"));
        assert_eq!(entry.date.to_rfc3339(), "2026-08-19T08:00:00+00:00");
    }

    #[test]
    fn missing_date_falls_back_to_created_at() {
        let record: RemoteEntry = serde_json::from_value(serde_json::json!({
            "objectId": "abc",
            "overallMood": "sad",
            "energyLevel": "low",
            "stressLevel": 8,
            "primaryThoughts": "past",
            "moodColor": "#4169E1",
            "colorName": "Royal Blue",
            "createdAt": "2026-08-19T08:00:01Z"
        }))
        .unwrap();

        let entry = MoodEntry::from(record);
        assert_eq!(entry.date, entry.created_at);
    }
}
