use crate::{
    extractors::{CadetID, Json},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{task_submissions, tasks};
use serde::Serialize;

#[derive(Serialize)]
pub struct Submission {
    #[serde(flatten)]
    submission: task_submissions::Model,
    task: Option<tasks::Model>,
}

/// The calling cadet's submissions, newest first.
pub async fn my_submissions<S: StateTrait>(
    State(state): State<S>,
    cadet_id: CadetID,
) -> Result<Json<Vec<Submission>>> {
    let rows = task_submissions::Entity::find_by_cadet(*cadet_id)
        .find_also_related(tasks::Entity)
        .all(state.db())
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(submission, task)| Submission { submission, task })
            .collect(),
    ))
}
