use crate::{
    error,
    extractors::{Json, ValidatedJson},
    handlers::parse_id,
    utils::set_option,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use entity::{
    sea_orm_active_enums::{Category, Difficulty},
    tasks,
};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 256))]
    title: Option<String>,
    #[validate(length(max = 4096))]
    description: Option<String>,
    category: Option<Category>,
    difficulty: Option<Difficulty>,
    #[validate(range(min = 1, max = 10000))]
    points: Option<i32>,
    deadline: Option<DateTime<Utc>>,
    is_active: Option<bool>,
}

pub async fn update_task<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<tasks::Model>> {
    let id = parse_id(&id, error::TASK_NOT_FOUND)?;

    let active_model = tasks::ActiveModel {
        id: Set(id),
        title: set_option(request.title),
        description: set_option(request.description),
        category: set_option(request.category),
        difficulty: set_option(request.difficulty),
        points: set_option(request.points),
        deadline: set_option(request.deadline),
        is_active: set_option(request.is_active),
        ..Default::default()
    };

    // an update without columns is not valid sql
    if !active_model.is_changed() {
        let task = tasks::Entity::find_by_id(id)
            .one(state.db())
            .await?
            .ok_or(error::TASK_NOT_FOUND)?;
        return Ok(Json(task));
    }

    let task = match tasks::Entity::update(active_model).exec(state.db()).await {
        Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
            return Err(error::TASK_NOT_FOUND)
        }
        r => r?,
    };

    Ok(Json(task))
}
