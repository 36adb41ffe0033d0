use entity::{
    cadets::{self, constraints::*},
    score_history::{self, constraints::*},
    scores::{self, constraints::*},
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
                    .table(cadets::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(cadets::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(cadets::Column::Name).string_len(128).not_null())
                    .col(ColumnDef::new(cadets::Column::Platoon).string_len(16).not_null())
                    .col(ColumnDef::new(cadets::Column::Squad).integer().not_null())
                    .col(
                        ColumnDef::new(cadets::Column::Rank)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(cadets::Column::TotalScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(cadets::Column::AvatarUrl).string().null())
                    .col(ColumnDef::new(cadets::Column::JoinDate).date().not_null())
                    .primary_key(Index::create().name(PK_CADETS).col(cadets::Column::Id))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(scores::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(scores::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(scores::Column::CadetId).uuid().not_null())
                    .col(
                        ColumnDef::new(scores::Column::StudyScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(scores::Column::DisciplineScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(scores::Column::EventsScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(scores::Column::Description).text().not_null())
                    .col(
                        ColumnDef::new(scores::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_SCORES).col(scores::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_SCORES_CADET_ID)
                            .col(scores::Column::CadetId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SCORES_CADET_ID)
                            .from(scores::Entity, scores::Column::CadetId)
                            .to(cadets::Entity, cadets::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(score_history::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(score_history::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(score_history::Column::CadetId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(score_history::Column::Category)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(score_history::Column::Points)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(score_history::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(score_history::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_SCORE_HISTORY)
                            .col(score_history::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SCORE_HISTORY_CADET_ID)
                            .from(score_history::Entity, score_history::Column::CadetId)
                            .to(cadets::Entity, cadets::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(score_history::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(scores::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(cadets::Entity).to_owned())
            .await
    }
}
