use super::{cadets, sea_orm_active_enums::TaskStatus, tasks};
use sea_orm::{entity::prelude::*, QueryOrder};
use serde::Serialize;

pub mod constraints {
    pub const PK_TASK_SUBMISSIONS: &str = "PK_task_submissions";
    pub const UC_TASK_SUBMISSIONS_TASK_CADET: &str = "UC_task_submissions_task_cadet";
    pub const FK_TASK_SUBMISSIONS_TASK_ID: &str = "FK_task_submissions_task_id";
    pub const FK_TASK_SUBMISSIONS_CADET_ID: &str = "FK_task_submissions_cadet_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "task_submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub task_id: Uuid,
    pub cadet_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub submission_text: String,
    pub status: TaskStatus,
    pub submitted_at: Option<DateTimeUtc>,
    pub reviewed_at: Option<DateTimeUtc>,
    pub reviewer_feedback: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "tasks::Entity",
        from = "Column::TaskId",
        to = "tasks::Column::Id",
        on_delete = "Cascade"
    )]
    Task,
    #[sea_orm(
        belongs_to = "cadets::Entity",
        from = "Column::CadetId",
        to = "cadets::Column::Id",
        on_delete = "Cascade"
    )]
    Cadet,
}

impl Related<tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<cadets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cadet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_pair(task_id: Uuid, cadet_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::TaskId.eq(task_id))
            .filter(Column::CadetId.eq(cadet_id))
    }

    #[inline]
    pub fn find_by_cadet(cadet_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::CadetId.eq(cadet_id))
            .order_by_desc(Column::CreatedAt)
    }
}
