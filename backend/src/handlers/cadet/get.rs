use crate::{
    error,
    extractors::Json,
    handlers::parse_id,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::cadets;
use sea_orm::EntityTrait;

pub async fn get_cadet<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<cadets::Model>> {
    let id = parse_id(&id, error::CADET_NOT_FOUND)?;

    let cadet = cadets::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::CADET_NOT_FOUND)?;

    Ok(Json(cadet))
}
