use crate::{
    error,
    extractors::{Json, ValidatedJson},
    handlers::parse_id,
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::achievements;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

pub async fn list_achievements<S: StateTrait>(
    State(state): State<S>,
) -> Result<Json<Vec<achievements::Model>>> {
    let achievements = achievements::Entity::find()
        .order_by_asc(achievements::Column::Title)
        .all(state.db())
        .await?;

    Ok(Json(achievements))
}

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 128))]
    title: String,
    #[validate(length(max = 1024))]
    description: String,
    #[validate(length(min = 1, max = 64))]
    icon: String,
    #[validate(length(min = 1, max = 32))]
    color: String,
}

pub async fn create_achievement<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<achievements::Model>)> {
    let achievement = achievements::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(request.title),
        description: Set(request.description),
        icon: Set(request.icon),
        color: Set(request.color),
    }
    .insert(state.db())
    .await?;

    Ok((StatusCode::CREATED, Json(achievement)))
}

/// Also takes the achievement away from every cadet holding it.
pub async fn delete_achievement<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id, error::ACHIEVEMENT_NOT_FOUND)?;

    let res = achievements::Entity::delete_by_id(id)
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::ACHIEVEMENT_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
