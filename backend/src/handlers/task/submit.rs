use crate::{
    error,
    extractors::{CadetID, Json, ValidatedJson},
    handlers::parse_id,
    utils::de,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use chrono::Utc;
use entity::{sea_orm_active_enums::TaskStatus, task_submissions};
use sea_orm::{ActiveModelTrait, IntoActiveModel, QuerySelect, Set, TransactionTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[serde(deserialize_with = "de::trimmed")]
    #[validate(length(min = 1, max = 8192))]
    submission_text: String,
}

pub async fn submit_task<S: StateTrait>(
    State(state): State<S>,
    cadet_id: CadetID,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<task_submissions::Model>> {
    let id = parse_id(&id, error::SUBMISSION_NOT_FOUND)?;

    let txn = state.db().begin().await?;

    let submission = task_submissions::Entity::find_by_pair(id, *cadet_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::SUBMISSION_NOT_FOUND)?;

    if !submission.status.can_transition_to(TaskStatus::Submitted) {
        return Err(error::INVALID_SUBMISSION_STATE);
    }

    let mut active_model = submission.into_active_model();
    active_model.submission_text = Set(request.submission_text);
    active_model.status = Set(TaskStatus::Submitted);
    active_model.submitted_at = Set(Some(Utc::now()));

    let submission = active_model.update(&txn).await?;

    txn.commit().await?;

    Ok(Json(submission))
}
