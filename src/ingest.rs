//! Upload ingestion: identifier generation and multipart form decoding.

use std::collections::BTreeMap;

use axum::extract::Multipart;
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use md5::{Digest, Md5};
use rand::Rng;

use crate::assets::AssetSlot;
use crate::db::games::NewGame;
use crate::error::{Result, ServerError};

/// Exclusive upper bound of the random draw mixed into each identifier
const ID_RANDOM_RANGE: u32 = 1_000_000;

/// Generate a new game identifier from the current time and a random draw.
///
/// This is a uniqueness token, not a content hash of the upload. Collisions
/// are unlikely but possible.
pub fn generate_game_id() -> String {
    let draw = rand::thread_rng().gen_range(0..ID_RANDOM_RANGE);
    game_id_for(Utc::now(), draw)
}

/// Hex MD5 of `"<ISO-8601 timestamp with millis>-<draw>"`
pub fn game_id_for(now: DateTime<Utc>, draw: u32) -> String {
    let seed = format!("{}-{}", now.to_rfc3339_opts(SecondsFormat::Millis, true), draw);
    let mut hasher = Md5::new();
    hasher.update(seed.as_bytes());
    let result = hasher.finalize();
    result.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decoded `/create` form
#[derive(Debug, Default)]
pub struct UploadForm {
    pub game_name: Option<String>,
    pub creator_name: Option<String>,
    pub assets: BTreeMap<AssetSlot, Bytes>,
}

impl UploadForm {
    /// Read every part of a multipart upload.
    ///
    /// File parts without a filename (an empty file input) are skipped. A file
    /// part outside the known asset names, or a second file for the same
    /// asset, rejects the whole upload. Unknown text fields are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    if file_name.is_empty() {
                        continue;
                    }
                    let slot = AssetSlot::from_form_field(&name).ok_or_else(|| {
                        ServerError::InvalidUpload(format!("Unexpected field: {}", name))
                    })?;
                    if form.assets.contains_key(&slot) {
                        return Err(ServerError::InvalidUpload(format!("Unexpected field: {}", name)));
                    }
                    let data = field.bytes().await?;
                    tracing::debug!("Received {} ({}, {} bytes)", name, file_name, data.len());
                    form.assets.insert(slot, data);
                }
                None => match name.as_str() {
                    "gameName" => form.game_name = Some(field.text().await?),
                    "creatorName" => form.creator_name = Some(field.text().await?),
                    _ => tracing::debug!("Ignoring form field {}", name),
                },
            }
        }

        Ok(form)
    }

    /// Turn the form into a storable game.
    ///
    /// Validation stays permissive: a missing name is stored as an empty
    /// string and an empty creator name as absent.
    pub fn into_new_game(self, id: String) -> NewGame {
        NewGame {
            id,
            game_name: self.game_name.unwrap_or_default(),
            creator_name: self.creator_name.filter(|c| !c.is_empty()),
            assets: self.assets,
        }
    }
}
