use crate::{extractors::Json, Result, StateTrait};
use axum::extract::State;
use entity::tasks;
use sea_orm::{EntityTrait, QueryOrder};

/// Active tasks, nearest deadline first.
pub async fn list_active_tasks<S: StateTrait>(
    State(state): State<S>,
) -> Result<Json<Vec<tasks::Model>>> {
    let tasks = tasks::Entity::find_active().all(state.db()).await?;

    Ok(Json(tasks))
}

pub async fn list_all_tasks<S: StateTrait>(
    State(state): State<S>,
) -> Result<Json<Vec<tasks::Model>>> {
    let tasks = tasks::Entity::find()
        .order_by_desc(tasks::Column::CreatedAt)
        .all(state.db())
        .await?;

    Ok(Json(tasks))
}
