use super::sea_orm_active_enums::{Category, Difficulty};
use sea_orm::{entity::prelude::*, QueryOrder};
use serde::Serialize;

pub mod constraints {
    pub const PK_TASKS: &str = "PK_tasks";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub points: i32,
    pub deadline: DateTimeUtc,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::task_submissions::Entity")]
    Submissions,
}

impl Related<super::task_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// A task can be taken while it is active and its deadline has not passed.
    #[inline]
    pub fn is_open(&self, now: DateTimeUtc) -> bool {
        self.is_active && self.deadline > now
    }
}

impl Entity {
    #[inline]
    pub fn find_active() -> Select<Entity> {
        Self::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Deadline)
    }
}
