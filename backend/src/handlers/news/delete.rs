use crate::{error, handlers::parse_id, Result, StateTrait};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::news;
use sea_orm::EntityTrait;

pub async fn delete_news<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id, error::NEWS_NOT_FOUND)?;

    let res = news::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::NEWS_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
