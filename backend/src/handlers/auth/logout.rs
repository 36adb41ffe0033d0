use crate::{extractors::Session, Result, StateTrait};
use axum::{extract::State, http::StatusCode};
use entity::sessions;
use sea_orm::EntityTrait;

pub async fn logout<S: StateTrait>(
    State(state): State<S>,
    session: Session,
) -> Result<StatusCode> {
    sessions::Entity::delete_by_id(session.id)
        .exec(state.db())
        .await?;

    info!(user_id = session.user_id.to_string(), "signed out");

    Ok(StatusCode::NO_CONTENT)
}
