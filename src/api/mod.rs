pub mod assets;
pub mod handlers;

use std::sync::Arc;
use axum::{routing::get, Router};

pub use assets::custom_asset;
pub use handlers::{count, health, AppState};

/// Create the plain HTTP API router:
/// - `/count` cached number of stored games
/// - `/health` liveness probe
/// - `/assets/custom/:id/:asset` raw audio for a stored game
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/count", get(count))
        .route("/health", get(health))
        .route("/assets/custom/:id/:asset", get(custom_asset))
}
