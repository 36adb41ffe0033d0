use crate::{
    error::{self, DatabaseError},
    extractors::{Json, Session, ValidatedJson},
    handlers::parse_id,
    utils::de,
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::{news, news_comments};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Oldest first.
pub async fn list_comments<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Vec<news_comments::Model>>> {
    let id = parse_id(&id, error::NEWS_NOT_FOUND)?;

    news::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::NEWS_NOT_FOUND)?;

    let comments = news_comments::Entity::find_by_news(id)
        .all(state.db())
        .await?;

    Ok(Json(comments))
}

#[derive(Deserialize, Validate)]
pub struct Request {
    #[serde(deserialize_with = "de::trimmed")]
    #[validate(length(min = 1, max = 2000))]
    content: String,
}

/// The author is whoever is signed in.
pub async fn create_comment<S: StateTrait>(
    State(state): State<S>,
    session: Session,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<news_comments::Model>)> {
    let id = parse_id(&id, error::NEWS_NOT_FOUND)?;

    let comment = news_comments::ActiveModel {
        id: Set(Uuid::new_v4()),
        news_id: Set(id),
        author_name: Set(session.name),
        content: Set(request.content),
        created_at: Set(Utc::now()),
    }
    .insert(state.db())
    .await;

    let comment = match comment {
        Err(err) if err.foreign_key_violation() => return Err(error::NEWS_NOT_FOUND),
        r => r?,
    };

    Ok((StatusCode::CREATED, Json(comment)))
}
