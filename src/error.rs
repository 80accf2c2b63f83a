use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing game ID")]
    MissingGameId,

    #[error("Game not found")]
    GameNotFound,

    #[error("Unknown asset")]
    UnknownAsset,

    #[error("Not found")]
    AssetNotFound,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::MissingGameId => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::GameNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::UnknownAsset => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::AssetNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::InvalidUpload(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Multipart(e) => (e.status(), e.body_text()),
            ServerError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "DB error".to_string())
            }
            ServerError::Template(e) => {
                tracing::error!("Template error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            ServerError::Serialization(e) => {
                tracing::error!("Serialization error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
