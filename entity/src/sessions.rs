use super::users;
use sea_orm::{entity::prelude::*, DeleteMany};

pub mod constraints {
    pub const PK_SESSIONS: &str = "PK_sessions";
    pub const FK_SESSIONS_USER_ID: &str = "FK_sessions_user_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::UserId",
        to = "users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// A session that exists and has not expired yet.
    #[inline]
    pub fn find_live(id: Uuid, now: DateTimeUtc) -> Select<Entity> {
        Self::find_by_id(id).filter(Column::ExpiresAt.gt(now))
    }

    /// The user's sessions that are no longer accepted.
    pub fn delete_expired(user_id: Uuid, now: DateTimeUtc) -> DeleteMany<Entity> {
        Self::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ExpiresAt.lte(now))
    }
}
