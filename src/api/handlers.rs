use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DatabaseConnection;

use crate::monitor::GameCounter;

/// Application state shared across handlers
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    /// Cached row count, written by the count monitor
    pub counter: Arc<GameCounter>,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, counter: Arc<GameCounter>) -> Self {
        Self { db, counter }
    }
}

/// GET /count - last cached number of games, as plain text
pub async fn count(State(state): State<Arc<AppState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.counter.get().to_string(),
    )
        .into_response()
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "games": state.counter.get(),
    }))
}
