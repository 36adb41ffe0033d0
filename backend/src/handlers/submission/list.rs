use crate::{
    extractors::{Json, Query},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{cadets, sea_orm_active_enums::TaskStatus, task_submissions, tasks};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Params {
    status: Option<TaskStatus>,
}

#[derive(Serialize)]
pub struct Submission {
    #[serde(flatten)]
    submission: task_submissions::Model,
    task: Option<tasks::Model>,
    cadet_name: Option<String>,
}

/// Oldest first, so the review queue is worked in order.
pub async fn list_submissions<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<Submission>>> {
    let mut query = task_submissions::Entity::find().order_by_asc(task_submissions::Column::CreatedAt);

    if let Some(status) = params.status {
        query = query.filter(task_submissions::Column::Status.eq(status));
    }

    let rows = query
        .find_also_related(tasks::Entity)
        .all(state.db())
        .await?;

    let names: HashMap<Uuid, String> = cadets::Entity::find()
        .all(state.db())
        .await?
        .into_iter()
        .map(|cadet| (cadet.id, cadet.name))
        .collect();

    Ok(Json(
        rows.into_iter()
            .map(|(submission, task)| Submission {
                cadet_name: names.get(&submission.cadet_id).cloned(),
                submission,
                task,
            })
            .collect(),
    ))
}
