use super::create::unset_main;
use crate::{
    error::{self, Error},
    extractors::{Json, ValidatedJson},
    handlers::parse_id,
    utils::set_option,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::news;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 256))]
    title: Option<String>,
    #[validate(length(min = 1))]
    content: Option<String>,
    #[validate(length(min = 1, max = 128))]
    author: Option<String>,
    is_main: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    background_image_url: Option<Option<String>>,
    images: Option<Vec<String>>,
}

pub async fn update_news<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<news::Model>> {
    let id = parse_id(&id, error::NEWS_NOT_FOUND)?;

    let images = request
        .images
        .map(serde_json::to_value)
        .transpose()
        .map_err(Error::internal)?;

    let active_model = news::ActiveModel {
        id: Set(id),
        title: set_option(request.title),
        content: set_option(request.content),
        author: set_option(request.author),
        is_main: set_option(request.is_main),
        background_image_url: set_option(request.background_image_url),
        images: set_option(images),
        ..Default::default()
    };

    let txn = state.db().begin().await?;

    // an update without columns is not valid sql
    if !active_model.is_changed() {
        let news = news::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(error::NEWS_NOT_FOUND)?;
        return Ok(Json(news));
    }

    if request.is_main == Some(true) {
        unset_main(&txn).await?;
    }

    let news = match news::Entity::update(active_model).exec(&txn).await {
        Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
            return Err(error::NEWS_NOT_FOUND)
        }
        r => r?,
    };

    txn.commit().await?;

    Ok(Json(news))
}
