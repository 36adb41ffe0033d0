use super::{achievements, auto_achievements, cadets};
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_CADET_ACHIEVEMENTS: &str = "PK_cadet_achievements";
    pub const UC_CADET_ACHIEVEMENTS_MANUAL: &str = "UC_cadet_achievements_manual";
    pub const UC_CADET_ACHIEVEMENTS_AUTO: &str = "UC_cadet_achievements_auto";
    pub const FK_CADET_ACHIEVEMENTS_CADET_ID: &str = "FK_cadet_achievements_cadet_id";
    pub const FK_CADET_ACHIEVEMENTS_ACHIEVEMENT_ID: &str = "FK_cadet_achievements_achievement_id";
    pub const FK_CADET_ACHIEVEMENTS_AUTO_ACHIEVEMENT_ID: &str =
        "FK_cadet_achievements_auto_achievement_id";
}

/// Grants one catalog entry, manual or automatic, to one cadet.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "cadet_achievements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub cadet_id: Uuid,
    pub achievement_id: Option<Uuid>,
    pub auto_achievement_id: Option<Uuid>,
    pub awarded_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "cadets::Entity",
        from = "Column::CadetId",
        to = "cadets::Column::Id",
        on_delete = "Cascade"
    )]
    Cadet,
    #[sea_orm(
        belongs_to = "achievements::Entity",
        from = "Column::AchievementId",
        to = "achievements::Column::Id",
        on_delete = "Cascade"
    )]
    Achievement,
    #[sea_orm(
        belongs_to = "auto_achievements::Entity",
        from = "Column::AutoAchievementId",
        to = "auto_achievements::Column::Id",
        on_delete = "Cascade"
    )]
    AutoAchievement,
}

impl Related<cadets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cadet.def()
    }
}

impl Related<achievements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Achievement.def()
    }
}

impl Related<auto_achievements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AutoAchievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_cadet(cadet_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::CadetId.eq(cadet_id))
    }
}
