use crate::errors::{AppError, AppResult};
use crate::filters::filter_entries;
use crate::models::{
    EntryDraft, EntryFilter, EntryUpdate, HistoryResponse, MoodColor, MoodEntry, MoodOption,
    NewEntryRequest, SessionInfo, Statistics,
};
use crate::state::AppState;
use crate::ui::{render_entry, render_history, render_home};
use crate::validate::validate_entry;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use std::collections::BTreeMap;

pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let stats = state.journal.statistics().await?;
    Ok(Html(render_home(&stats)))
}

pub async fn entry_page() -> Html<String> {
    Html(render_entry())
}

pub async fn history_page() -> Html<String> {
    Html(render_history())
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(filter): Query<EntryFilter>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = state.journal.get_all_entries().await?;
    Ok(Json(filter_entries(&entries, &filter)))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(form): Json<NewEntryRequest>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let options = state.journal.get_options().await?;
    let errors = validate_entry(&form, &options);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let color = state.journal.resolve_color(&form.overall_mood).await?;
    let entry = state
        .journal
        .create_entry(EntryDraft { form, color })
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MoodEntry>> {
    Ok(Json(state.journal.get_entry(&id).await?))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut update): Json<EntryUpdate>,
) -> AppResult<Json<MoodEntry>> {
    if let Some(level) = update.stress_level {
        if !(1..=10).contains(&level) {
            return Err(AppError::Validation(vec![
                "Stress level must be between 1 and 10".to_string(),
            ]));
        }
    }

    // A changed mood re-resolves the color unless the caller set one.
    if let Some(mood) = &update.overall_mood {
        if update.mood_color.is_none() {
            let color = state.journal.resolve_color(mood).await?;
            update.mood_color = Some(color.color);
            update.color_name = Some(color.name);
            update.color_description = Some(color.description);
        }
    }

    Ok(Json(state.journal.update_entry(&id, &update).await?))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.journal.delete_entry(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<Statistics>> {
    Ok(Json(state.journal.statistics().await?))
}

pub async fn get_options(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Vec<MoodOption>>>> {
    Ok(Json(state.journal.get_options().await?))
}

pub async fn get_colors(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, MoodColor>>> {
    Ok(Json(state.journal.get_colors().await?))
}

/// The history view needs entries and options together; both loads are
/// issued concurrently and the response is all-or-nothing.
pub async fn get_history(State(state): State<AppState>) -> AppResult<Json<HistoryResponse>> {
    let (entries, options) = tokio::join!(
        state.journal.get_all_entries(),
        state.journal.get_options()
    );
    Ok(Json(HistoryResponse {
        entries: entries?,
        options: options?,
    }))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionInfo> {
    Json(state.journal.session().await)
}
