use crate::{error, extractors::CadetID, handlers::parse_id, Result, StateTrait};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::task_submissions;
use sea_orm::{EntityTrait, QuerySelect, TransactionTrait};

/// Drops a claim that has not been submitted yet.
pub async fn abandon_task<S: StateTrait>(
    State(state): State<S>,
    cadet_id: CadetID,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id, error::SUBMISSION_NOT_FOUND)?;

    let txn = state.db().begin().await?;

    let submission = task_submissions::Entity::find_by_pair(id, *cadet_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::SUBMISSION_NOT_FOUND)?;

    if !submission.status.can_abandon() {
        return Err(error::INVALID_SUBMISSION_STATE);
    }

    task_submissions::Entity::delete_by_id(submission.id)
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
