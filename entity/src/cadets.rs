use sea_orm::{entity::prelude::*, Condition, QueryOrder};
use serde::Serialize;

pub mod constraints {
    pub const PK_CADETS: &str = "PK_cadets";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "cadets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub platoon: String,
    pub squad: i32,
    pub rank: i32,
    pub total_score: i32,
    pub avatar_url: Option<String>,
    pub join_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::scores::Entity")]
    Score,
    #[sea_orm(has_many = "super::score_history::Entity")]
    ScoreHistory,
    #[sea_orm(has_many = "super::cadet_achievements::Entity")]
    CadetAchievements,
    #[sea_orm(has_many = "super::task_submissions::Entity")]
    TaskSubmissions,
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Score.def()
    }
}

impl Related<super::score_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoreHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Exact-match filters of the rating and cadet lists.
#[derive(Debug, Default, Clone)]
pub struct Filter<'a> {
    pub platoon: Option<&'a str>,
    pub squad: Option<i32>,
}

impl Filter<'_> {
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(platoon) = self.platoon {
            condition = condition.add(Column::Platoon.eq(platoon));
        }

        if let Some(squad) = self.squad {
            condition = condition.add(Column::Squad.eq(squad));
        }

        condition
    }
}

impl Entity {
    /// Cadets in rating order. Equal ranks are listed by name.
    #[inline]
    pub fn find_ranked(filter: &Filter<'_>) -> Select<Entity> {
        Self::find()
            .filter(filter.condition())
            .order_by_asc(Column::Rank)
            .order_by_asc(Column::Name)
    }
}
