use sea_orm::{entity::prelude::*, QueryOrder};
use serde::Serialize;

pub mod constraints {
    pub const PK_NEWS: &str = "PK_news";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub is_main: bool,
    pub background_image_url: Option<String>,
    /// JSON array of image urls.
    pub images: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::news_comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::news_likes::Entity")]
    Likes,
}

impl Related<super::news_comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::news_likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_latest() -> Select<Entity> {
        Self::find().order_by_desc(Column::CreatedAt)
    }
}
