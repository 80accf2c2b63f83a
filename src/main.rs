mod api;
mod assets;
mod config;
mod db;
mod error;
mod ingest;
mod monitor;
mod playback;
mod web_ui;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use config::ServerConfig;
use monitor::{spawn_count_monitor, GameCounter};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flappy_forge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Schema is created before any request is accepted
    let db = db::init_database(&config.db_path)
        .await
        .expect("Failed to initialize database");
    let db = Arc::new(db);
    tracing::info!("Database initialized at {:?}", config.db_path);

    let counter = Arc::new(GameCounter::new());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let monitor = spawn_count_monitor(db.clone(), counter.clone(), config.count_interval, shutdown_rx);

    let state = Arc::new(AppState::new(db, counter));
    let app = build_app(state, config.max_upload_bytes);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    let _ = shutdown_tx.send(true);
    let _ = monitor.await;
    tracing::info!("Server stopped");
}

/// Build the full application router
fn build_app(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .merge(api::router())
        .merge(web_ui::router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
