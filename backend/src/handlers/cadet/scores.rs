use crate::{error, extractors::Json, handlers::parse_id, Result, StateTrait};
use axum::extract::{Path, State};
use entity::scores;

/// The score row, or `null` for a cadet that never had one.
pub async fn get_scores<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Option<scores::Model>>> {
    let id = parse_id(&id, error::CADET_NOT_FOUND)?;

    let scores = scores::Entity::find_by_cadet(id).one(state.db()).await?;

    Ok(Json(scores))
}
