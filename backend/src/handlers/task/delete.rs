use crate::{error, handlers::parse_id, Result, StateTrait};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::tasks;
use sea_orm::EntityTrait;

/// Submissions of the task go with it; points already awarded stay.
pub async fn delete_task<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id, error::TASK_NOT_FOUND)?;

    let res = tasks::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::TASK_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
