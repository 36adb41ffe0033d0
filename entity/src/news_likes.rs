use super::{news, users};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_NEWS_LIKES: &str = "PK_news_likes";
    pub const UC_NEWS_LIKES_NEWS_USER: &str = "UC_news_likes_news_user";
    pub const FK_NEWS_LIKES_NEWS_ID: &str = "FK_news_likes_news_id";
    pub const FK_NEWS_LIKES_USER_ID: &str = "FK_news_likes_user_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news_likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub news_id: Uuid,
    pub user_id: Uuid,
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
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::UserId",
        to = "users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<news::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::News.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_news_and_user(news_id: Uuid, user_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::NewsId.eq(news_id))
            .filter(Column::UserId.eq(user_id))
    }
}
