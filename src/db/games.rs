//! Queries over the games table. Rows are only ever inserted and read.

use std::collections::BTreeMap;

use bytes::Bytes;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use super::entities::{game, Game};
use crate::assets::AssetSlot;

/// A game pack ready to be written
#[derive(Debug, Clone, Default)]
pub struct NewGame {
    pub id: String,
    pub game_name: String,
    pub creator_name: Option<String>,
    pub assets: BTreeMap<AssetSlot, Bytes>,
}

impl NewGame {
    fn into_active_model(mut self) -> game::ActiveModel {
        let mut take = |slot: AssetSlot| Set(self.assets.remove(&slot).map(|b| b.to_vec()));

        game::ActiveModel {
            background: take(AssetSlot::Background),
            bird: take(AssetSlot::Bird),
            ground: take(AssetSlot::Ground),
            tube1: take(AssetSlot::Tube1),
            tube2: take(AssetSlot::Tube2),
            sfx_hit: take(AssetSlot::SfxHit),
            sfx_point: take(AssetSlot::SfxPoint),
            sfx_wing: take(AssetSlot::SfxWing),
            id: Set(self.id),
            game_name: Set(self.game_name),
            creator_name: Set(self.creator_name),
            // Filled by the column default
            created_at: NotSet,
        }
    }
}

/// Insert one game row
pub async fn insert_game(db: &DatabaseConnection, game: NewGame) -> Result<(), DbErr> {
    let id = game.id.clone();
    Game::insert(game.into_active_model())
        .exec_without_returning(db)
        .await?;
    tracing::debug!("Stored game {}", id);
    Ok(())
}

/// Fetch the first game row with the given id
pub async fn find_game(db: &DatabaseConnection, id: &str) -> Result<Option<game::Model>, DbErr> {
    Game::find()
        .filter(game::Column::Id.eq(id))
        .one(db)
        .await
}

/// Fetch a single asset column for a game without loading the other blobs.
///
/// The outer `Option` is the row, the inner one the blob.
pub async fn find_asset(
    db: &DatabaseConnection,
    id: &str,
    slot: AssetSlot,
) -> Result<Option<Option<Vec<u8>>>, DbErr> {
    Game::find()
        .select_only()
        .column(slot.column())
        .filter(game::Column::Id.eq(id))
        .into_tuple::<Option<Vec<u8>>>()
        .one(db)
        .await
}

/// Total number of stored games
pub async fn count_games(db: &DatabaseConnection) -> Result<u64, DbErr> {
    Game::find().count(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn test_db(dir: &TempDir) -> DatabaseConnection {
        init_database(&dir.path().join("flappy.db")).await.unwrap()
    }

    fn sample_game(id: &str) -> NewGame {
        let mut assets = BTreeMap::new();
        assets.insert(AssetSlot::Bird, Bytes::from_static(b"\x89PNG\r\n\x1a\nbird"));
        assets.insert(AssetSlot::SfxWing, Bytes::from_static(&[0xff, 0xfb, 0x90, 0x00, 0x01]));
        NewGame {
            id: id.to_string(),
            game_name: "Neon Flap".to_string(),
            creator_name: Some("ada".to_string()),
            assets,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let db = test_db(&temp_dir).await;

        insert_game(&db, sample_game("abc")).await.unwrap();

        let row = find_game(&db, "abc").await.unwrap().expect("row exists");
        assert_eq!(row.game_name, "Neon Flap");
        assert_eq!(row.creator_name.as_deref(), Some("ada"));
        assert_eq!(row.asset(AssetSlot::Bird), Some(&b"\x89PNG\r\n\x1a\nbird"[..]));
        assert_eq!(row.asset(AssetSlot::SfxWing), Some(&[0xff, 0xfb, 0x90, 0x00, 0x01][..]));
        assert_eq!(row.asset(AssetSlot::Background), None);
        assert_eq!(row.asset(AssetSlot::SfxHit), None);
        assert!(row.created_at.is_some());

        assert!(find_game(&db, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_asset_single_column() {
        let temp_dir = TempDir::new().unwrap();
        let db = test_db(&temp_dir).await;
        insert_game(&db, sample_game("abc")).await.unwrap();

        let wing = find_asset(&db, "abc", AssetSlot::SfxWing).await.unwrap();
        assert_eq!(wing, Some(Some(vec![0xff, 0xfb, 0x90, 0x00, 0x01])));

        // Row exists, blob absent
        let hit = find_asset(&db, "abc", AssetSlot::SfxHit).await.unwrap();
        assert_eq!(hit, Some(None));

        // No such row
        let none = find_asset(&db, "nope", AssetSlot::SfxWing).await.unwrap();
        assert_eq!(none, None);
    }

    #[tokio::test]
    async fn test_empty_blob_is_present() {
        let temp_dir = TempDir::new().unwrap();
        let db = test_db(&temp_dir).await;

        let mut game = sample_game("empty");
        game.assets.insert(AssetSlot::SfxHit, Bytes::new());
        insert_game(&db, game).await.unwrap();

        let hit = find_asset(&db, "empty", AssetSlot::SfxHit).await.unwrap();
        assert_eq!(hit, Some(Some(Vec::new())));
    }

    #[tokio::test]
    async fn test_count_and_duplicate_ids() {
        let temp_dir = TempDir::new().unwrap();
        let db = test_db(&temp_dir).await;
        assert_eq!(count_games(&db).await.unwrap(), 0);

        insert_game(&db, sample_game("one")).await.unwrap();
        insert_game(&db, sample_game("two")).await.unwrap();
        // Identifiers are not unique at the storage layer
        insert_game(&db, sample_game("two")).await.unwrap();

        assert_eq!(count_games(&db).await.unwrap(), 3);
        assert!(find_game(&db, "two").await.unwrap().is_some());
    }
}
