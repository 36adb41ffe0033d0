use entity::{
    cadets,
    task_submissions::{self, constraints::*},
    tasks::{self, constraints::*},
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(tasks::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(tasks::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(tasks::Column::Title).string_len(256).not_null())
                    .col(ColumnDef::new(tasks::Column::Description).text().not_null())
                    .col(ColumnDef::new(tasks::Column::Category).string_len(16).not_null())
                    .col(ColumnDef::new(tasks::Column::Difficulty).string_len(16).not_null())
                    .col(ColumnDef::new(tasks::Column::Points).integer().not_null())
                    .col(
                        ColumnDef::new(tasks::Column::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(tasks::Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(tasks::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_TASKS).col(tasks::Column::Id))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(task_submissions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(task_submissions::Column::Id)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(task_submissions::Column::TaskId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(task_submissions::Column::CadetId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(task_submissions::Column::SubmissionText)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(task_submissions::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(task_submissions::Column::SubmittedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(task_submissions::Column::ReviewedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(task_submissions::Column::ReviewerFeedback)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(task_submissions::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_TASK_SUBMISSIONS)
                            .col(task_submissions::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_TASK_SUBMISSIONS_TASK_CADET)
                            .col(task_submissions::Column::TaskId)
                            .col(task_submissions::Column::CadetId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TASK_SUBMISSIONS_TASK_ID)
                            .from(task_submissions::Entity, task_submissions::Column::TaskId)
                            .to(tasks::Entity, tasks::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TASK_SUBMISSIONS_CADET_ID)
                            .from(task_submissions::Entity, task_submissions::Column::CadetId)
                            .to(cadets::Entity, cadets::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(task_submissions::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(tasks::Entity).to_owned())
            .await
    }
}
