use super::Identity;
use crate::{
    error,
    extractors::{Json, Session},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{cadets, users};
use sea_orm::EntityTrait;

pub async fn me<S: StateTrait>(
    State(state): State<S>,
    session: Session,
) -> Result<Json<Identity>> {
    let (user, cadet) = users::Entity::find_by_id(session.user_id)
        .find_also_related(cadets::Entity)
        .one(state.db())
        .await?
        .ok_or(error::COULD_NOT_GET_CLAIMS)?;

    Ok(Json(Identity::new(user, cadet)))
}
