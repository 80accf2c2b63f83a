//! Game entity, one row per uploaded asset pack

use sea_orm::entity::prelude::*;

use crate::assets::AssetSlot;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    // Not unique in the table; lookups take the first matching row
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub game_name: String,
    pub creator_name: Option<String>,
    pub background: Option<Vec<u8>>,
    pub bird: Option<Vec<u8>>,
    pub ground: Option<Vec<u8>>,
    #[sea_orm(column_name = "tube1")]
    pub tube1: Option<Vec<u8>>,
    #[sea_orm(column_name = "tube2")]
    pub tube2: Option<Vec<u8>>,
    pub sfx_hit: Option<Vec<u8>>,
    pub sfx_point: Option<Vec<u8>>,
    pub sfx_wing: Option<Vec<u8>>,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Stored bytes for one asset slot, if that asset was uploaded
    pub fn asset(&self, slot: AssetSlot) -> Option<&[u8]> {
        let blob = match slot {
            AssetSlot::Background => &self.background,
            AssetSlot::Bird => &self.bird,
            AssetSlot::Ground => &self.ground,
            AssetSlot::Tube1 => &self.tube1,
            AssetSlot::Tube2 => &self.tube2,
            AssetSlot::SfxHit => &self.sfx_hit,
            AssetSlot::SfxPoint => &self.sfx_point,
            AssetSlot::SfxWing => &self.sfx_wing,
        };
        blob.as_deref()
    }
}
