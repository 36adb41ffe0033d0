use crate::{error, extractors::Json, handlers::parse_id, Result, StateTrait};
use axum::extract::{Path, State};
use entity::score_history;

pub async fn get_history<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Vec<score_history::Model>>> {
    let id = parse_id(&id, error::CADET_NOT_FOUND)?;

    let history = score_history::Entity::find_recent(id)
        .all(state.db())
        .await?;

    Ok(Json(history))
}
