mod comments;
mod create;
mod delete;
mod get;
mod like;
mod list;
mod update;

use crate::{middlewares::AdminLayer, state::StateTrait, Result};
use axum::{
    handler::Handler,
    routing::{get, post},
    Router,
};
use entity::{news, news_comments, news_likes};
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect,
};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Routes for news
///
/// # Public
/// GET    /news
/// GET    /news/{id}
/// GET    /news/{id}/comments
///
/// # Signed-in users
/// POST   /news/{id}/comments
/// POST   /news/{id}/like
///
/// # Admin actions
/// POST   /news
/// PATCH  /news/{id}
/// DELETE /news/{id}
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_news::<S>).post(create::create_news::<S>.layer(AdminLayer)),
        )
        .route(
            "/{id}",
            get(get::get_news::<S>)
                .patch(update::update_news::<S>.layer(AdminLayer))
                .delete(delete::delete_news::<S>.layer(AdminLayer)),
        )
        .route(
            "/{id}/comments",
            get(comments::list_comments::<S>).post(comments::create_comment::<S>),
        )
        .route("/{id}/like", post(like::toggle_like::<S>))
}

/// A news item with its engagement counters.
#[derive(Serialize)]
pub struct News {
    #[serde(flatten)]
    news: news::Model,
    likes_count: i64,
    comments_count: i64,
}

impl News {
    async fn load<C: ConnectionTrait>(db: &C, items: Vec<news::Model>) -> Result<Vec<News>> {
        let ids: Vec<Uuid> = items.iter().map(|item| item.id).collect();

        let likes = count_by_news(
            db,
            news_likes::Entity::find()
                .select_only()
                .column(news_likes::Column::NewsId)
                .column_as(Expr::col(news_likes::Column::Id).count(), "count")
                .filter(news_likes::Column::NewsId.is_in(ids.clone()))
                .group_by(news_likes::Column::NewsId),
        )
        .await?;

        let comments = count_by_news(
            db,
            news_comments::Entity::find()
                .select_only()
                .column(news_comments::Column::NewsId)
                .column_as(Expr::col(news_comments::Column::Id).count(), "count")
                .filter(news_comments::Column::NewsId.is_in(ids))
                .group_by(news_comments::Column::NewsId),
        )
        .await?;

        Ok(items
            .into_iter()
            .map(|news| News {
                likes_count: likes.get(&news.id).copied().unwrap_or(0),
                comments_count: comments.get(&news.id).copied().unwrap_or(0),
                news,
            })
            .collect())
    }
}

async fn count_by_news<C, E>(db: &C, query: sea_orm::Select<E>) -> Result<HashMap<Uuid, i64>>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let counts: Vec<(Uuid, i64)> = query.into_tuple().all(db).await?;

    Ok(counts.into_iter().collect())
}
