use super::News;
use crate::{error, extractors::Json, handlers::parse_id, Error, Result, StateTrait};
use axum::extract::{Path, State};
use entity::news;
use sea_orm::EntityTrait;

pub async fn get_news<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<News>> {
    let id = parse_id(&id, error::NEWS_NOT_FOUND)?;

    let item = news::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::NEWS_NOT_FOUND)?;

    let news = News::load(state.db(), vec![item])
        .await?
        .pop()
        .ok_or_else(|| Error::internal("news vanished while counting"))?;

    Ok(Json(news))
}
