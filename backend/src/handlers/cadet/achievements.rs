use crate::{
    error::{self, DatabaseError},
    extractors::Json,
    handlers::parse_id,
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use entity::{achievements, auto_achievements, cadet_achievements, cadets};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Serialize)]
#[serde(tag = "kind", content = "achievement", rename_all = "snake_case")]
pub enum Entry {
    Manual(achievements::Model),
    Auto(auto_achievements::Model),
}

#[derive(Serialize)]
pub struct Awarded {
    id: Uuid,
    awarded_date: DateTime<Utc>,
    #[serde(flatten)]
    entry: Entry,
}

pub async fn list_awarded<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Awarded>>> {
    let id = parse_id(&id, error::CADET_NOT_FOUND)?;

    let awarded = cadet_achievements::Entity::find_by_cadet(id)
        .order_by_asc(cadet_achievements::Column::AwardedDate)
        .find_also_related(achievements::Entity)
        .all(state.db())
        .await?;

    let auto_ids: Vec<Uuid> = awarded
        .iter()
        .filter_map(|(awarded, _)| awarded.auto_achievement_id)
        .collect();

    let mut autos: HashMap<Uuid, auto_achievements::Model> = if auto_ids.is_empty() {
        HashMap::new()
    } else {
        auto_achievements::Entity::find()
            .filter(auto_achievements::Column::Id.is_in(auto_ids))
            .all(state.db())
            .await?
            .into_iter()
            .map(|auto| (auto.id, auto))
            .collect()
    };

    let entries = awarded
        .into_iter()
        .filter_map(|(awarded, manual)| {
            let entry = match (manual, awarded.auto_achievement_id) {
                (Some(manual), _) => Entry::Manual(manual),
                (None, Some(auto_id)) => Entry::Auto(autos.remove(&auto_id)?),
                (None, None) => {
                    warn!(id = awarded.id.to_string(), "award without catalog entry");
                    return None;
                }
            };

            Some(Awarded {
                id: awarded.id,
                awarded_date: awarded.awarded_date,
                entry,
            })
        })
        .collect();

    Ok(Json(entries))
}

#[derive(Deserialize)]
pub struct Request {
    achievement_id: Uuid,
}

pub async fn award_achievement<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<Awarded>)> {
    let id = parse_id(&id, error::CADET_NOT_FOUND)?;

    let txn = state.db().begin().await?;

    cadets::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(error::CADET_NOT_FOUND)?;

    let achievement = achievements::Entity::find_by_id(request.achievement_id)
        .one(&txn)
        .await?
        .ok_or(error::ACHIEVEMENT_NOT_FOUND)?;

    let existing = cadet_achievements::Entity::find_by_cadet(id)
        .filter(cadet_achievements::Column::AchievementId.eq(achievement.id))
        .one(&txn)
        .await?;

    if existing.is_some() {
        return Err(error::ACHIEVEMENT_ALREADY_AWARDED);
    }

    let awarded = cadet_achievements::ActiveModel {
        id: Set(Uuid::new_v4()),
        cadet_id: Set(id),
        achievement_id: Set(Some(achievement.id)),
        auto_achievement_id: Set(None),
        awarded_date: Set(Utc::now()),
    }
    .insert(&txn)
    .await;

    let awarded = match awarded {
        Err(err) if err.unique_violation() => return Err(error::ACHIEVEMENT_ALREADY_AWARDED),
        r => r?,
    };

    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(Awarded {
            id: awarded.id,
            awarded_date: awarded.awarded_date,
            entry: Entry::Manual(achievement),
        }),
    ))
}
