use entity::{
    news::{self, constraints::*},
    news_comments::{self, constraints::*},
    news_likes::{self, constraints::*},
    users,
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
                    .table(news::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(news::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(news::Column::Title).string_len(256).not_null())
                    .col(ColumnDef::new(news::Column::Content).text().not_null())
                    .col(ColumnDef::new(news::Column::Author).string_len(128).not_null())
                    .col(
                        ColumnDef::new(news::Column::IsMain)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(news::Column::BackgroundImageUrl).string().null())
                    .col(ColumnDef::new(news::Column::Images).json().not_null())
                    .col(
                        ColumnDef::new(news::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_NEWS).col(news::Column::Id))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(news_comments::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(news_comments::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(news_comments::Column::NewsId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(news_comments::Column::AuthorName)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(news_comments::Column::Content).text().not_null())
                    .col(
                        ColumnDef::new(news_comments::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_NEWS_COMMENTS)
                            .col(news_comments::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NEWS_COMMENTS_NEWS_ID)
                            .from(news_comments::Entity, news_comments::Column::NewsId)
                            .to(news::Entity, news::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(news_likes::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(news_likes::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(news_likes::Column::NewsId).uuid().not_null())
                    .col(ColumnDef::new(news_likes::Column::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(news_likes::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_NEWS_LIKES)
                            .col(news_likes::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_NEWS_LIKES_NEWS_USER)
                            .col(news_likes::Column::NewsId)
                            .col(news_likes::Column::UserId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NEWS_LIKES_NEWS_ID)
                            .from(news_likes::Entity, news_likes::Column::NewsId)
                            .to(news::Entity, news::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NEWS_LIKES_USER_ID)
                            .from(news_likes::Entity, news_likes::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(news_likes::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(news_comments::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(news::Entity).to_owned())
            .await
    }
}
