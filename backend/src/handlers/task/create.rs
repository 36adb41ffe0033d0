use crate::{
    extractors::{Json, ValidatedJson},
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use entity::{
    sea_orm_active_enums::{Category, Difficulty},
    tasks,
};
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 256))]
    title: String,
    #[validate(length(max = 4096))]
    description: String,
    category: Category,
    difficulty: Difficulty,
    #[validate(range(min = 1, max = 10000))]
    points: i32,
    deadline: DateTime<Utc>,
    #[serde(default = "active_by_default")]
    is_active: bool,
}

fn active_by_default() -> bool {
    true
}

pub async fn create_task<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<tasks::Model>)> {
    let task = tasks::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(request.title),
        description: Set(request.description),
        category: Set(request.category),
        difficulty: Set(request.difficulty),
        points: Set(request.points),
        deadline: Set(request.deadline),
        is_active: Set(request.is_active),
        created_at: Set(Utc::now()),
    }
    .insert(state.db())
    .await?;

    info!(task_id = task.id.to_string(), "created task");

    Ok((StatusCode::CREATED, Json(task)))
}
