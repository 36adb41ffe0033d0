mod create;
mod list;

use crate::{middlewares::AdminLayer, state::StateTrait};
use axum::{handler::Handler, routing::get, Router};
use chrono::{DateTime, Utc};
use entity::{sea_orm_active_enums::Role, users};
use serde::Serialize;
use uuid::Uuid;

/// Routes for account administration, admin only
///
/// GET  /users
/// POST /users
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new().route(
        "/",
        get(list::list_users::<S>.layer(AdminLayer)).post(create::create_user::<S>.layer(AdminLayer)),
    )
}

/// An account without its password hash.
#[derive(Debug, Serialize)]
pub struct User {
    id: Uuid,
    email: String,
    name: String,
    role: Role,
    cadet_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            cadet_id: user.cadet_id,
            created_at: user.created_at,
        }
    }
}
