use super::news;
use sea_orm::{entity::prelude::*, QueryOrder};
use serde::Serialize;

pub mod constraints {
    pub const PK_NEWS_COMMENTS: &str = "PK_news_comments";
    pub const FK_NEWS_COMMENTS_NEWS_ID: &str = "FK_news_comments_news_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "news_comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub news_id: Uuid,
    pub author_name: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "news::Entity",
        from = "Column::NewsId",
        to = "news::Column::Id",
        on_delete = "Cascade"
    )]
    News,
}

impl Related<news::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::News.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_news(news_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::NewsId.eq(news_id))
            .order_by_asc(Column::CreatedAt)
    }
}
