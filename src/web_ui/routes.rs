//! Web UI route handlers.

use axum::{
    extract::{Multipart, Query, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;

use super::templates;
use crate::api::AppState;
use crate::db::games::{find_game, insert_game};
use crate::error::{Result, ServerError};
use crate::ingest::{generate_game_id, UploadForm};
use crate::playback::GamePage;

/// Create the web UI router
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/create", post(create_game))
        .route("/play", get(play_game))
}

/// Upload form
async fn index() -> Result<Response> {
    render_template("index.html", &Context::new())
}

/// POST /create - store an uploaded asset pack
async fn create_game(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response> {
    let form = UploadForm::from_multipart(multipart).await?;

    let game_id = generate_game_id();
    let game = form.into_new_game(game_id.clone());
    let game_name = game.game_name.clone();
    let asset_count = game.assets.len();

    insert_game(state.db.as_ref(), game).await?;
    tracing::info!("Created game {} ({:?}) with {} assets", game_id, game_name, asset_count);

    let mut context = Context::new();
    context.insert("game_id", &game_id);
    context.insert("game_name", &game_name);

    render_template("uploaded.html", &context)
}

/// Query params for /play
#[derive(Deserialize)]
pub struct PlayQuery {
    pub id: Option<String>,
}

/// GET /play?id=<id> - game page with the pack's assets
async fn play_game(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayQuery>,
) -> Result<Response> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or(ServerError::MissingGameId)?;

    let row = match find_game(state.db.as_ref(), &id).await {
        Ok(Some(row)) => row,
        Ok(None) => return Err(ServerError::GameNotFound),
        Err(e) => {
            tracing::error!("Failed to load game {}: {}", id, e);
            return Err(ServerError::GameNotFound);
        }
    };

    let page = GamePage::from_model(&id, &row);

    let mut context = Context::new();
    context.insert("game_name", &page.game_name);
    context.insert("game_creator", &page.game_creator);
    context.insert("game_json", &script_json(&page)?);

    render_template("game.html", &context)
}

/// Serialize a value for embedding inside a `<script>` element
fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Helper to render a template
fn render_template(name: &str, context: &Context) -> Result<Response> {
    let html = templates::render(name, context)?;
    Ok(Html(html).into_response())
}
