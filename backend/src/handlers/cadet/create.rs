use crate::{
    extractors::{Json, ValidatedJson},
    utils::{rating, scoring},
    Error, Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{NaiveDate, Utc};
use entity::cadets;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 128))]
    name: String,
    #[validate(length(min = 1, max = 16))]
    platoon: String,
    #[validate(range(min = 1, max = 9))]
    squad: i32,
    #[validate(url)]
    avatar_url: Option<String>,
    /// Defaults to today.
    join_date: Option<NaiveDate>,
}

pub async fn create_cadet<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<cadets::Model>)> {
    let txn = state.db().begin().await?;

    let id = Uuid::new_v4();

    cadets::ActiveModel {
        id: Set(id),
        name: Set(request.name),
        platoon: Set(request.platoon),
        squad: Set(request.squad),
        rank: Set(0),
        total_score: Set(0),
        avatar_url: Set(request.avatar_url),
        join_date: Set(request.join_date.unwrap_or_else(|| Utc::now().date_naive())),
    }
    .insert(&txn)
    .await?;

    scoring::empty_scores(id).insert(&txn).await?;

    rating::recompute_ranks(&txn).await?;

    let cadet = cadets::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::internal("created cadet vanished"))?;

    txn.commit().await?;

    info!(cadet_id = id.to_string(), "created cadet");

    Ok((StatusCode::CREATED, Json(cadet)))
}
