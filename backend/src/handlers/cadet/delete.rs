use crate::{error, handlers::parse_id, utils::rating, Result, StateTrait};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::cadets;
use sea_orm::{EntityTrait, TransactionTrait};

/// Deletes the cadet with everything hanging off it; linked accounts are unlinked.
pub async fn delete_cadet<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id, error::CADET_NOT_FOUND)?;

    let txn = state.db().begin().await?;

    let res = cadets::Entity::delete_by_id(id).exec(&txn).await?;

    if res.rows_affected == 0 {
        return Err(error::CADET_NOT_FOUND);
    }

    rating::recompute_ranks(&txn).await?;

    txn.commit().await?;

    info!(cadet_id = id.to_string(), "deleted cadet");

    Ok(StatusCode::NO_CONTENT)
}
