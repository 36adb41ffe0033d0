use entity::{
    achievements::{self, constraints::*},
    auto_achievements::{self, constraints::*},
    cadet_achievements::{self, constraints::*},
    cadets,
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
                    .table(achievements::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(achievements::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(achievements::Column::Title)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(achievements::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(achievements::Column::Icon).string_len(64).not_null())
                    .col(ColumnDef::new(achievements::Column::Color).string_len(64).not_null())
                    .primary_key(
                        Index::create()
                            .name(PK_ACHIEVEMENTS)
                            .col(achievements::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(auto_achievements::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(auto_achievements::Column::Id)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(auto_achievements::Column::Title)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(auto_achievements::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(auto_achievements::Column::Icon)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(auto_achievements::Column::Color)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(auto_achievements::Column::RequirementType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(auto_achievements::Column::RequirementCategory)
                            .string_len(16)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(auto_achievements::Column::RequirementValue)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_AUTO_ACHIEVEMENTS)
                            .col(auto_achievements::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(cadet_achievements::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(cadet_achievements::Column::Id)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(cadet_achievements::Column::CadetId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(cadet_achievements::Column::AchievementId)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(cadet_achievements::Column::AutoAchievementId)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(cadet_achievements::Column::AwardedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_CADET_ACHIEVEMENTS)
                            .col(cadet_achievements::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_CADET_ACHIEVEMENTS_MANUAL)
                            .col(cadet_achievements::Column::CadetId)
                            .col(cadet_achievements::Column::AchievementId)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_CADET_ACHIEVEMENTS_AUTO)
                            .col(cadet_achievements::Column::CadetId)
                            .col(cadet_achievements::Column::AutoAchievementId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CADET_ACHIEVEMENTS_CADET_ID)
                            .from(cadet_achievements::Entity, cadet_achievements::Column::CadetId)
                            .to(cadets::Entity, cadets::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CADET_ACHIEVEMENTS_ACHIEVEMENT_ID)
                            .from(
                                cadet_achievements::Entity,
                                cadet_achievements::Column::AchievementId,
                            )
                            .to(achievements::Entity, achievements::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CADET_ACHIEVEMENTS_AUTO_ACHIEVEMENT_ID)
                            .from(
                                cadet_achievements::Entity,
                                cadet_achievements::Column::AutoAchievementId,
                            )
                            .to(auto_achievements::Entity, auto_achievements::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(cadet_achievements::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(auto_achievements::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(achievements::Entity).to_owned())
            .await
    }
}
