use super::{cadets, sea_orm_active_enums::Category};
use sea_orm::{entity::prelude::*, QueryOrder, QuerySelect};
use serde::Serialize;

pub mod constraints {
    pub const PK_SCORE_HISTORY: &str = "PK_score_history";
    pub const FK_SCORE_HISTORY_CADET_ID: &str = "FK_score_history_cadet_id";
}

/// How many entries a cadet's history view shows.
pub const RECENT_LIMIT: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "score_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub cadet_id: Uuid,
    pub category: Category,
    pub points: i32,
    pub description: String,
    pub created_at: DateTimeUtc,
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
}

impl Related<cadets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cadet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_recent(cadet_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::CadetId.eq(cadet_id))
            .order_by_desc(Column::CreatedAt)
            .limit(RECENT_LIMIT)
    }
}
