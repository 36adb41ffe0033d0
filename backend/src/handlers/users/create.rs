use super::User;
use crate::{
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    password, Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::{
    cadets, sea_orm_active_enums::Role, users, users::constraints::UC_USERS_CADET_ID,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(email, length(max = 256))]
    email: String,
    #[validate(length(min = 1, max = 128))]
    name: String,
    #[validate(length(min = 8, max = 256))]
    password: String,
    role: Role,
    cadet_id: Option<Uuid>,
}

pub async fn create_user<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<User>)> {
    let password_hash = password::hash_blocking(request.password).await?;

    let txn = state.db().begin().await?;

    if let Some(cadet_id) = request.cadet_id {
        cadets::Entity::find_by_id(cadet_id)
            .one(&txn)
            .await?
            .ok_or(error::CADET_NOT_FOUND)?;
    }

    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(request.email.trim().to_lowercase()),
        name: Set(request.name),
        password_hash: Set(password_hash),
        role: Set(request.role),
        cadet_id: Set(request.cadet_id),
        created_at: Set(Utc::now()),
    }
    .insert(&txn)
    .await;

    let user = match user {
        Err(err) if err.unique_violation_of(UC_USERS_CADET_ID, "users.cadet_id") => {
            return Err(error::CADET_ALREADY_LINKED)
        }
        Err(err) if err.unique_violation() => return Err(error::USER_ALREADY_EXISTS),
        r => r?,
    };

    txn.commit().await?;

    info!(user_id = user.id.to_string(), "created account");

    Ok((StatusCode::CREATED, Json(User::from(user))))
}
