use super::{cadets, sea_orm_active_enums::Role};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_USERS: &str = "PK_users";
    pub const UC_USERS_EMAIL: &str = "UC_users_email";
    pub const UC_USERS_CADET_ID: &str = "UC_users_cadet_id";
    pub const FK_USERS_CADET_ID: &str = "FK_users_cadet_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    #[sea_orm(unique)]
    pub cadet_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "cadets::Entity",
        from = "Column::CadetId",
        to = "cadets::Column::Id"
    )]
    Cadet,
}

impl Related<cadets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cadet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Emails are stored lowercased, so the lookup lowercases too.
    #[inline]
    pub fn find_by_email(email: &str) -> Select<Entity> {
        Self::find().filter(Column::Email.eq(email.trim().to_lowercase()))
    }
}
