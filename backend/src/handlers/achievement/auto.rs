use crate::{
    error,
    extractors::{Json, ValidatedJson},
    handlers::parse_id,
    utils::scoring,
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::{
    auto_achievements,
    sea_orm_active_enums::{Category, RequirementType},
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub async fn list_auto_achievements<S: StateTrait>(
    State(state): State<S>,
) -> Result<Json<Vec<auto_achievements::Model>>> {
    let rules = auto_achievements::Entity::find_ordered()
        .all(state.db())
        .await?;

    Ok(Json(rules))
}

#[derive(Deserialize, Validate)]
#[validate(schema(function = "category_matches_type"))]
pub struct Request {
    #[validate(length(min = 1, max = 128))]
    title: String,
    #[validate(length(max = 1024))]
    description: String,
    #[validate(length(min = 1, max = 64))]
    icon: String,
    #[validate(length(min = 1, max = 32))]
    color: String,
    requirement_type: RequirementType,
    requirement_category: Option<Category>,
    #[validate(range(min = 0))]
    requirement_value: i32,
}

/// Category rules need a category, total rules must not carry one.
fn category_matches_type(request: &Request) -> std::result::Result<(), ValidationError> {
    match (request.requirement_type, request.requirement_category) {
        (RequirementType::CategoryScore, Some(_)) | (RequirementType::TotalScore, None) => Ok(()),
        _ => Err(ValidationError::new("requirement_category")),
    }
}

/// Creates the rule and grants it to every cadet that already meets it.
pub async fn create_auto_achievement<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<auto_achievements::Model>)> {
    let txn = state.db().begin().await?;

    let rule = auto_achievements::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(request.title),
        description: Set(request.description),
        icon: Set(request.icon),
        color: Set(request.color),
        requirement_type: Set(request.requirement_type),
        requirement_category: Set(request.requirement_category),
        requirement_value: Set(request.requirement_value),
    }
    .insert(&txn)
    .await?;

    let granted = scoring::grant_to_qualifying(&txn, &rule).await?;

    txn.commit().await?;

    info!(
        auto_achievement_id = rule.id.to_string(),
        "created auto achievement, granted to {} cadet(s)", granted
    );

    Ok((StatusCode::CREATED, Json(rule)))
}

pub async fn delete_auto_achievement<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id, error::ACHIEVEMENT_NOT_FOUND)?;

    let res = auto_achievements::Entity::delete_by_id(id)
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::ACHIEVEMENT_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
