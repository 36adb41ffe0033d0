use entity::{
    cadets,
    sessions::{self, constraints::*},
    users::{self, constraints::*},
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
                    .table(users::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(users::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(users::Column::Email).string_len(256).not_null())
                    .col(ColumnDef::new(users::Column::Name).string_len(128).not_null())
                    .col(ColumnDef::new(users::Column::PasswordHash).text().not_null())
                    .col(ColumnDef::new(users::Column::Role).string_len(16).not_null())
                    .col(ColumnDef::new(users::Column::CadetId).uuid().null())
                    .col(
                        ColumnDef::new(users::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_USERS).col(users::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_USERS_EMAIL)
                            .col(users::Column::Email)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_USERS_CADET_ID)
                            .col(users::Column::CadetId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USERS_CADET_ID)
                            .from(users::Entity, users::Column::CadetId)
                            .to(cadets::Entity, cadets::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(sessions::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(sessions::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(sessions::Column::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(sessions::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_SESSIONS).col(sessions::Column::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SESSIONS_USER_ID)
                            .from(sessions::Entity, sessions::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(sessions::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await
    }
}
