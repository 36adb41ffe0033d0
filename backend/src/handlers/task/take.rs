use crate::{
    error::{self, DatabaseError},
    extractors::{CadetID, Json},
    handlers::parse_id,
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::{sea_orm_active_enums::TaskStatus, task_submissions, tasks};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

/// Claims a task for the calling cadet. Each cadet can hold one row per task.
pub async fn take_task<S: StateTrait>(
    State(state): State<S>,
    cadet_id: CadetID,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<task_submissions::Model>)> {
    let id = parse_id(&id, error::TASK_NOT_FOUND)?;

    let txn = state.db().begin().await?;

    let task = tasks::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(error::TASK_NOT_FOUND)?;

    let now = Utc::now();

    if !task.is_open(now) {
        return Err(error::TASK_NOT_ACTIVE);
    }

    let existing = task_submissions::Entity::find_by_pair(id, *cadet_id)
        .one(&txn)
        .await?;

    if existing.is_some() {
        return Err(error::SUBMISSION_ALREADY_EXISTS);
    }

    let submission = task_submissions::ActiveModel {
        id: Set(Uuid::new_v4()),
        task_id: Set(id),
        cadet_id: Set(*cadet_id),
        submission_text: Set(String::new()),
        status: Set(TaskStatus::Taken),
        submitted_at: Set(None),
        reviewed_at: Set(None),
        reviewer_feedback: Set(None),
        created_at: Set(now),
    }
    .insert(&txn)
    .await;

    let submission = match submission {
        Err(err) if err.unique_violation() => return Err(error::SUBMISSION_ALREADY_EXISTS),
        r => r?,
    };

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(submission)))
}
