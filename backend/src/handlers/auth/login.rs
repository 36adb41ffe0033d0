use super::Identity;
use crate::{
    error::{self, Error},
    extractors::{Json, ValidatedJson},
    jwt::Claims,
    password, Result, StateTrait,
};
use axum::extract::State;
use chrono::{DateTime, Utc};
use entity::{cadets, sea_orm_active_enums::Role, sessions, users};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 256))]
    email: String,
    #[validate(length(min = 1, max = 256))]
    password: String,
}

#[derive(Serialize)]
pub struct Response {
    token: String,
    expires_at: DateTime<Utc>,
    user: Identity,
}

pub async fn login<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let user = users::Entity::find_by_email(&request.email)
        .one(state.db())
        .await?;

    let hash = user.as_ref().map(|user| user.password_hash.clone());
    let valid = password::verify_blocking(hash, request.password).await?;

    let Some(user) = user.filter(|_| valid) else {
        debug!("failed login attempt");
        return Err(error::INVALID_CREDENTIALS);
    };

    let cadet = linked_cadet(state.db(), &user).await?;

    let now = Utc::now();
    let ttl = chrono::Duration::from_std(state.config().session_ttl).map_err(Error::internal)?;
    let expires_at = now + ttl;

    let session = open_session(state.db(), user.id, now, expires_at).await?;

    let token = state.jwt().encode(&Claims {
        sub: user.id,
        sid: session.id,
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    })?;

    info!(user_id = user.id.to_string(), "signed in");

    Ok(Json(Response {
        token,
        expires_at,
        user: Identity::new(user, cadet),
    }))
}

/// Opens a new session, dropping the ones of this user that already expired.
async fn open_session<C: TransactionTrait>(
    db: &C,
    user_id: Uuid,
    now: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) -> Result<sessions::Model> {
    let txn = db.begin().await?;

    let pruned = sessions::Entity::delete_expired(user_id, now)
        .exec(&txn)
        .await?;

    if pruned.rows_affected > 0 {
        debug!(
            user_id = user_id.to_string(),
            "removed {} expired session(s)",
            pruned.rows_affected
        );
    }

    let session = sessions::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        created_at: Set(now),
        expires_at: Set(expires_at),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(session)
}

/// Cadet accounts must point at an existing cadet to sign in.
async fn linked_cadet<C: ConnectionTrait>(
    db: &C,
    user: &users::Model,
) -> Result<Option<cadets::Model>> {
    let cadet = match user.cadet_id {
        Some(id) => cadets::Entity::find_by_id(id).one(db).await?,
        None => None,
    };

    if user.role == Role::Cadet && cadet.is_none() {
        warn!(user_id = user.id.to_string(), "cadet account is not linked");
        return Err(error::ACCOUNT_NOT_LINKED);
    }

    Ok(cadet)
}
