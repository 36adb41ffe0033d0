mod login;
mod logout;
mod me;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};
use entity::{cadets, sea_orm_active_enums::Role, users};
use serde::Serialize;
use uuid::Uuid;

/// Routes for the signed-in identity
///
/// POST /auth/login
/// POST /auth/logout
/// GET  /auth/me
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/login", post(login::login::<S>))
        .route("/logout", post(logout::logout::<S>))
        .route("/me", get(me::me::<S>))
}

/// What a client learns about the account it signed in with.
#[derive(Debug, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub is_admin: bool,
    pub cadet_id: Option<Uuid>,
    pub platoon: Option<String>,
    pub squad: Option<i32>,
}

impl Identity {
    fn new(user: users::Model, cadet: Option<cadets::Model>) -> Self {
        let (platoon, squad) = match cadet {
            Some(cadet) => (Some(cadet.platoon), Some(cadet.squad)),
            None => (None, None),
        };

        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            is_admin: user.role == Role::Admin,
            cadet_id: user.cadet_id,
            platoon,
            squad,
        }
    }
}
