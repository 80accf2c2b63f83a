//! The eight asset slots a custom game pack can fill.

use crate::db::entities::game;

pub const IMAGE_MIME: &str = "image/png";
pub const AUDIO_MIME: &str = "audio/mpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetSlot {
    Background,
    Bird,
    Ground,
    Tube1,
    Tube2,
    SfxHit,
    SfxPoint,
    SfxWing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

impl AssetSlot {
    pub const ALL: [AssetSlot; 8] = [
        AssetSlot::Background,
        AssetSlot::Bird,
        AssetSlot::Ground,
        AssetSlot::Tube1,
        AssetSlot::Tube2,
        AssetSlot::SfxHit,
        AssetSlot::SfxPoint,
        AssetSlot::SfxWing,
    ];

    pub fn kind(self) -> AssetKind {
        match self {
            AssetSlot::SfxHit | AssetSlot::SfxPoint | AssetSlot::SfxWing => AssetKind::Audio,
            _ => AssetKind::Image,
        }
    }

    /// Name of the multipart file part carrying this asset
    pub fn form_field(self) -> &'static str {
        match self {
            AssetSlot::Background => "background",
            AssetSlot::Bird => "bird",
            AssetSlot::Ground => "ground",
            AssetSlot::Tube1 => "tube1",
            AssetSlot::Tube2 => "tube2",
            AssetSlot::SfxHit => "hit",
            AssetSlot::SfxPoint => "point",
            AssetSlot::SfxWing => "wing",
        }
    }

    pub fn from_form_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.form_field() == name)
    }

    /// Storage column holding this asset
    pub fn column(self) -> game::Column {
        match self {
            AssetSlot::Background => game::Column::Background,
            AssetSlot::Bird => game::Column::Bird,
            AssetSlot::Ground => game::Column::Ground,
            AssetSlot::Tube1 => game::Column::Tube1,
            AssetSlot::Tube2 => game::Column::Tube2,
            AssetSlot::SfxHit => game::Column::SfxHit,
            AssetSlot::SfxPoint => game::Column::SfxPoint,
            AssetSlot::SfxWing => game::Column::SfxWing,
        }
    }

    /// File name the asset streamer serves this slot under. Images are
    /// embedded inline and have none.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            AssetSlot::SfxHit => Some("sfx_hit.mp3"),
            AssetSlot::SfxPoint => Some("sfx_point.mp3"),
            AssetSlot::SfxWing => Some("sfx_wing.mp3"),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.file_name() == Some(name))
    }

    /// Content type announced for this asset, whatever its real encoding
    pub fn content_type(self) -> &'static str {
        match self.kind() {
            AssetKind::Image => IMAGE_MIME,
            AssetKind::Audio => AUDIO_MIME,
        }
    }
}
