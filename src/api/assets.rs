//! Raw audio streaming for custom game packs.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::AppState;
use crate::assets::AssetSlot;
use crate::db::games::find_asset;
use crate::error::{Result, ServerError};

/// GET /assets/custom/:id/:asset - stream one stored sound effect.
///
/// Only `sfx_hit.mp3`, `sfx_point.mp3` and `sfx_wing.mp3` are served. Lookup
/// failures are reported as not found.
pub async fn custom_asset(
    State(state): State<Arc<AppState>>,
    Path((id, asset)): Path<(String, String)>,
) -> Result<Response> {
    let slot = AssetSlot::from_file_name(&asset).ok_or(ServerError::UnknownAsset)?;

    let data = match find_asset(state.db.as_ref(), &id, slot).await {
        Ok(Some(Some(data))) => data,
        Ok(_) => return Err(ServerError::AssetNotFound),
        Err(e) => {
            tracing::error!("Failed to load {} for game {}: {}", asset, id, e);
            return Err(ServerError::AssetNotFound);
        }
    };

    Ok(([(header::CONTENT_TYPE, slot.content_type())], data).into_response())
}
