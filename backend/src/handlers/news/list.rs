use super::News;
use crate::{extractors::Json, Result, StateTrait};
use axum::extract::State;
use entity::news;

/// Newest first.
pub async fn list_news<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<News>>> {
    let items = news::Entity::find_latest().all(state.db()).await?;

    Ok(Json(News::load(state.db(), items).await?))
}
