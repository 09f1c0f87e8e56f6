use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/entry", get(handlers::entry_page))
        .route("/history", get(handlers::history_page))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(
            "/api/entries/:id",
            get(handlers::get_entry)
                .put(handlers::update_entry)
                .delete(handlers::delete_entry),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/options", get(handlers::get_options))
        .route("/api/colors", get(handlers::get_colors))
        .route("/api/history", get(handlers::get_history))
        .route("/api/session", get(handlers::get_session))
        .with_state(state)
}
