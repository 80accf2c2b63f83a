//! Page model for playing a stored game.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

use crate::assets::AssetSlot;
use crate::db::entities::game;

/// Everything the game page needs. Images are inlined as data URLs; audio is
/// only flagged, the client fetches it from the asset streamer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GamePage {
    pub game_id: String,
    pub game_name: String,
    pub game_creator: Option<String>,
    pub background: Option<String>,
    pub bird: Option<String>,
    pub ground: Option<String>,
    pub tube1: Option<String>,
    pub tube2: Option<String>,
    pub sfx_hit: Option<bool>,
    pub sfx_point: Option<bool>,
    pub sfx_wing: Option<bool>,
}

impl GamePage {
    pub fn from_model(id: &str, row: &game::Model) -> Self {
        let image = |slot| row.asset(slot).map(|data| image_data_url(slot, data));
        let audio = |slot| row.asset(slot).map(|_| true);

        Self {
            game_id: id.to_string(),
            game_name: row.game_name.clone(),
            game_creator: row.creator_name.clone(),
            background: image(AssetSlot::Background),
            bird: image(AssetSlot::Bird),
            ground: image(AssetSlot::Ground),
            tube1: image(AssetSlot::Tube1),
            tube2: image(AssetSlot::Tube2),
            sfx_hit: audio(AssetSlot::SfxHit),
            sfx_point: audio(AssetSlot::SfxPoint),
            sfx_wing: audio(AssetSlot::SfxWing),
        }
    }
}

/// Encode an image slot's bytes as a data URL, labelled with the slot's
/// content type (PNG for every image, whatever the upload actually was).
pub fn image_data_url(slot: AssetSlot, data: &[u8]) -> String {
    format!("data:{};base64,{}", slot.content_type(), BASE64.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> game::Model {
        game::Model {
            id: "abc".to_string(),
            game_name: "Pixel Pigeon".to_string(),
            creator_name: None,
            background: None,
            bird: Some(vec![1, 2, 3, 250]),
            ground: None,
            // JPEG magic, still announced as PNG
            tube1: Some(vec![0xff, 0xd8, 0xff]),
            tube2: None,
            sfx_hit: Some(vec![9; 16]),
            sfx_point: None,
            sfx_wing: Some(Vec::new()),
            created_at: None,
        }
    }

    #[test]
    fn test_images_become_png_data_urls() {
        let page = GamePage::from_model("abc", &row());

        let bird = page.bird.expect("bird present");
        let encoded = bird.strip_prefix("data:image/png;base64,").expect("png prefix");
        assert_eq!(BASE64.decode(encoded).unwrap(), vec![1, 2, 3, 250]);

        assert!(page.tube1.unwrap().starts_with("data:image/png;base64,"));
        assert_eq!(page.background, None);
        assert_eq!(page.ground, None);
        assert_eq!(page.tube2, None);
    }

    #[test]
    fn test_data_url_uses_slot_content_type() {
        for slot in AssetSlot::ALL {
            if slot.kind() == crate::assets::AssetKind::Image {
                assert_eq!(image_data_url(slot, b"hi"), "data:image/png;base64,aGk=");
            }
        }
    }

    #[test]
    fn test_audio_reduced_to_flags() {
        let page = GamePage::from_model("abc", &row());
        assert_eq!(page.sfx_hit, Some(true));
        assert_eq!(page.sfx_point, None);
        // An empty upload still counts as present
        assert_eq!(page.sfx_wing, Some(true));
    }

    #[test]
    fn test_serializes_absent_assets_as_null() {
        let page = GamePage::from_model("abc", &row());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["game_id"], "abc");
        assert_eq!(json["game_name"], "Pixel Pigeon");
        assert!(json["game_creator"].is_null());
        assert!(json["background"].is_null());
        assert!(json["sfx_point"].is_null());
        assert_eq!(json["sfx_hit"], true);
    }
}
