use crate::{
    error::{self, Error},
    extractors::{Json, ValidatedJson},
    handlers::parse_id,
    utils::scoring::{self, Award},
    Result, StateTrait,
};
use axum::extract::{Path, State};
use chrono::Utc;
use entity::{sea_orm_active_enums::TaskStatus, task_submissions, tasks};
use sea_orm::{
    ActiveModelTrait, EntityTrait, IntoActiveModel, QuerySelect, Set, TransactionTrait,
};
use serde::Deserialize;
use validator::{Validate, ValidationError};

#[derive(Deserialize, Validate)]
#[validate(schema(function = "review_outcome"))]
pub struct Request {
    status: TaskStatus,
    #[validate(length(max = 2048))]
    feedback: Option<String>,
}

/// A review either completes or rejects.
fn review_outcome(request: &Request) -> std::result::Result<(), ValidationError> {
    if !request.status.is_final() {
        return Err(ValidationError::new("status"));
    }
    Ok(())
}

/// Closes a submitted task. Completing it awards the task's points to the cadet.
pub async fn review_submission<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<task_submissions::Model>> {
    let id = parse_id(&id, error::SUBMISSION_NOT_FOUND)?;

    let txn = state.db().begin().await?;

    let submission = task_submissions::Entity::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::SUBMISSION_NOT_FOUND)?;

    if !submission.status.can_transition_to(request.status) {
        return Err(error::INVALID_SUBMISSION_STATE);
    }

    let task = tasks::Entity::find_by_id(submission.task_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::internal("submission without task"))?;

    let cadet_id = submission.cadet_id;

    let mut active_model = submission.into_active_model();
    active_model.status = Set(request.status);
    active_model.reviewed_at = Set(Some(Utc::now()));
    active_model.reviewer_feedback = Set(request.feedback);

    let submission = active_model.update(&txn).await?;

    if request.status == TaskStatus::Completed {
        scoring::award_points(
            &txn,
            cadet_id,
            Award {
                category: task.category,
                points: task.points,
                description: format!("Task completed: {}", task.title),
            },
        )
        .await?;
    }

    txn.commit().await?;

    info!(
        submission_id = id.to_string(),
        status = ?request.status,
        "reviewed submission"
    );

    Ok(Json(submission))
}
