use crate::{
    extractors::{Json, Session, ValidatedJson},
    Error, Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::news;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    Set, TransactionTrait,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 256))]
    title: String,
    #[validate(length(min = 1))]
    content: String,
    /// Defaults to the name of the signed-in admin.
    #[validate(length(min = 1, max = 128))]
    author: Option<String>,
    #[serde(default)]
    is_main: bool,
    #[validate(url)]
    background_image_url: Option<String>,
    #[serde(default)]
    images: Vec<String>,
}

pub async fn create_news<S: StateTrait>(
    State(state): State<S>,
    session: Session,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<news::Model>)> {
    let txn = state.db().begin().await?;

    if request.is_main {
        unset_main(&txn).await?;
    }

    let news = news::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(request.title),
        content: Set(request.content),
        author: Set(request.author.unwrap_or(session.name)),
        is_main: Set(request.is_main),
        background_image_url: Set(request.background_image_url),
        images: Set(serde_json::to_value(request.images).map_err(Error::internal)?),
        created_at: Set(Utc::now()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(news)))
}

/// At most one news item is featured at a time.
pub(super) async fn unset_main<C: ConnectionTrait>(db: &C) -> Result<()> {
    news::Entity::update_many()
        .col_expr(news::Column::IsMain, Expr::value(false))
        .filter(news::Column::IsMain.eq(true))
        .exec(db)
        .await?;

    Ok(())
}
