use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failures from the storage layer. Remote-side variants are absorbed by the
/// backend selector and never reach a client; only local persistence and
/// not-found errors can surface.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("remote backend is not configured")]
    RemoteUnconfigured,

    #[error("remote backend rejected the request")]
    RemoteUnauthorized,

    #[error("remote request failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("failed to persist journal data: {0}")]
    LocalPersistence(String),

    #[error("entry not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// An unconfigured or unauthorized remote is a normal deployment state,
    /// not something to warn about.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::RemoteUnconfigured | Self::RemoteUnauthorized)
    }
}

/// Errors surfaced over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<String>),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(format!("entry {id}")),
            StoreError::LocalPersistence(_) => Self::Internal("Failed to save mood entry".into()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                messages.join(", "),
                Some(messages),
            ),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message, None),
            AppError::Internal(message) => {
                tracing::error!("request failed: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
        };

        let mut error = json!({
            "message": message,
            "code": status.as_u16(),
        });
        if let Some(messages) = details {
            error["messages"] = json!(messages);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
