use super::{
    scores,
    sea_orm_active_enums::{Category, RequirementType},
};
use sea_orm::{entity::prelude::*, QueryOrder};
use serde::Serialize;

pub mod constraints {
    pub const PK_AUTO_ACHIEVEMENTS: &str = "PK_auto_achievements";
}

/// A catalog achievement granted automatically once a score threshold is reached.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "auto_achievements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub requirement_type: RequirementType,
    pub requirement_category: Option<Category>,
    pub requirement_value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether a cadet with these scores qualifies.
    ///
    /// A category rule without a category never matches.
    pub fn is_met_by(&self, score: &scores::Model) -> bool {
        let value = match (self.requirement_type, self.requirement_category) {
            (RequirementType::TotalScore, _) => score.total(),
            (RequirementType::CategoryScore, Some(category)) => score.get(category),
            (RequirementType::CategoryScore, None) => return false,
        };

        value >= self.requirement_value
    }
}

impl Entity {
    #[inline]
    pub fn find_ordered() -> Select<Entity> {
        Self::find().order_by_asc(Column::RequirementValue)
    }
}
