//! Web UI Module
//!
//! HTML pages: the upload form, the upload confirmation and the game itself.

mod routes;
mod templates;

use axum::Router;
use std::sync::Arc;

use crate::api::AppState;

/// Create the web UI router.
/// Mount this with `.merge(web_ui::router())` in main.rs
pub fn router() -> Router<Arc<AppState>> {
    routes::create_router()
}
