//! Score roll-up shared by manual awards and completed task reviews.

use super::rating;
use crate::error::{self, Result};
use chrono::Utc;
use entity::{
    auto_achievements, cadet_achievements, cadets, score_history, scores,
    sea_orm_active_enums::Category,
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect, Set,
};
use std::collections::HashSet;
use uuid::Uuid;

pub struct Award {
    pub category: Category,
    pub points: i32,
    pub description: String,
}

/// Applies a point delta to a cadet.
///
/// Appends the history entry, updates the category score and the cadet's
/// total, grants newly reached auto achievements and recomputes ranks.
/// Callers run it inside a transaction.
pub async fn award_points<C: ConnectionTrait>(
    txn: &C,
    cadet_id: Uuid,
    award: Award,
) -> Result<scores::Model> {
    cadets::Entity::find_by_id(cadet_id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(error::CADET_NOT_FOUND)?;

    let now = Utc::now();

    score_history::ActiveModel {
        id: Set(Uuid::new_v4()),
        cadet_id: Set(cadet_id),
        category: Set(award.category),
        points: Set(award.points),
        description: Set(award.description.clone()),
        created_at: Set(now),
    }
    .insert(txn)
    .await?;

    let current = scores::Entity::find_by_cadet(cadet_id)
        .lock_exclusive()
        .one(txn)
        .await?;

    let current = match current {
        Some(current) => current,
        None => empty_scores(cadet_id).insert(txn).await?,
    };

    let value = current
        .with_points(award.category, award.points)
        .ok_or(error::SCORE_OUT_OF_RANGE)?
        .get(award.category);

    let mut score = current.into_active_model();
    match award.category {
        Category::Study => score.study_score = Set(value),
        Category::Discipline => score.discipline_score = Set(value),
        Category::Events => score.events_score = Set(value),
    }
    score.description = Set(award.description);
    score.updated_at = Set(now);
    let score = score.update(txn).await?;

    cadets::Entity::update_many()
        .col_expr(cadets::Column::TotalScore, Expr::value(score.total()))
        .filter(cadets::Column::Id.eq(cadet_id))
        .exec(txn)
        .await?;

    let granted = grant_auto_achievements(txn, &score).await?;
    if !granted.is_empty() {
        info!(
            cadet_id = cadet_id.to_string(),
            "granted {} auto achievement(s)",
            granted.len()
        );
    }

    rating::recompute_ranks(txn).await?;

    Ok(score)
}

/// A zeroed score row, created together with its cadet.
pub fn empty_scores(cadet_id: Uuid) -> scores::ActiveModel {
    scores::ActiveModel {
        id: Set(Uuid::new_v4()),
        cadet_id: Set(cadet_id),
        study_score: Set(0),
        discipline_score: Set(0),
        events_score: Set(0),
        description: Set(String::new()),
        updated_at: Set(Utc::now()),
    }
}

/// Grants every auto achievement the scores satisfy and the cadet does not hold yet.
pub async fn grant_auto_achievements<C: ConnectionTrait>(
    txn: &C,
    score: &scores::Model,
) -> Result<Vec<auto_achievements::Model>> {
    let rules = auto_achievements::Entity::find().all(txn).await?;

    let held: HashSet<Uuid> = cadet_achievements::Entity::find_by_cadet(score.cadet_id)
        .filter(cadet_achievements::Column::AutoAchievementId.is_not_null())
        .all(txn)
        .await?
        .into_iter()
        .filter_map(|awarded| awarded.auto_achievement_id)
        .collect();

    let granted: Vec<_> = rules
        .into_iter()
        .filter(|rule| !held.contains(&rule.id) && rule.is_met_by(score))
        .collect();

    for rule in &granted {
        auto_award(score.cadet_id, rule.id).insert(txn).await?;
    }

    Ok(granted)
}

/// Grants a freshly created rule to every cadet that already qualifies.
pub async fn grant_to_qualifying<C: ConnectionTrait>(
    txn: &C,
    rule: &auto_achievements::Model,
) -> Result<usize> {
    let held: HashSet<Uuid> = cadet_achievements::Entity::find()
        .filter(cadet_achievements::Column::AutoAchievementId.eq(rule.id))
        .all(txn)
        .await?
        .into_iter()
        .map(|awarded| awarded.cadet_id)
        .collect();

    let qualifying: Vec<_> = scores::Entity::find()
        .all(txn)
        .await?
        .into_iter()
        .filter(|score| !held.contains(&score.cadet_id) && rule.is_met_by(score))
        .collect();

    for score in &qualifying {
        auto_award(score.cadet_id, rule.id).insert(txn).await?;
    }

    Ok(qualifying.len())
}

fn auto_award(cadet_id: Uuid, auto_achievement_id: Uuid) -> cadet_achievements::ActiveModel {
    cadet_achievements::ActiveModel {
        id: Set(Uuid::new_v4()),
        cadet_id: Set(cadet_id),
        achievement_id: Set(None),
        auto_achievement_id: Set(Some(auto_achievement_id)),
        awarded_date: Set(Utc::now()),
    }
}
