use crate::{
    error,
    extractors::{Json, Session},
    handlers::parse_id,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use chrono::Utc;
use entity::{news, news_likes};
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct Response {
    liked: bool,
    count: u64,
}

/// Likes the news item, or takes the caller's like back.
pub async fn toggle_like<S: StateTrait>(
    State(state): State<S>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let id = parse_id(&id, error::NEWS_NOT_FOUND)?;

    let txn = state.db().begin().await?;

    news::Entity::find_by_id(id)
        .lock_shared()
        .one(&txn)
        .await?
        .ok_or(error::NEWS_NOT_FOUND)?;

    let existing = news_likes::Entity::find_by_news_and_user(id, session.user_id)
        .one(&txn)
        .await?;

    let liked = match existing {
        Some(like) => {
            news_likes::Entity::delete_by_id(like.id).exec(&txn).await?;
            false
        }
        None => {
            // A concurrent like from the same user may have landed first; it still counts.
            if !add_like(&txn, id, session.user_id).await? {
                debug!(news_id = id.to_string(), "like already recorded");
            }
            true
        }
    };

    let count = news_likes::Entity::find()
        .filter(news_likes::Column::NewsId.eq(id))
        .count(&txn)
        .await?;

    txn.commit().await?;

    Ok(Json(Response { liked, count }))
}

/// Inserts the like unless the user already has one on this item.
/// Returns whether a row was added.
async fn add_like<C: ConnectionTrait>(db: &C, news_id: Uuid, user_id: Uuid) -> Result<bool> {
    let like = news_likes::ActiveModel {
        id: Set(Uuid::new_v4()),
        news_id: Set(news_id),
        user_id: Set(user_id),
        created_at: Set(Utc::now()),
    };

    let inserted = news_likes::Entity::insert(like)
        .on_conflict(
            OnConflict::columns([news_likes::Column::NewsId, news_likes::Column::UserId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(inserted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing;
    use sea_orm::ActiveModelTrait;

    #[tokio::test]
    async fn duplicate_like_is_not_an_error() {
        let db = testing::database().await;
        let news = testing::news(&db).await;
        let user = testing::user("fan@example.com", None)
            .insert(&db)
            .await
            .unwrap();

        assert!(add_like(&db, news.id, user.id).await.unwrap());
        assert!(!add_like(&db, news.id, user.id).await.unwrap());

        let count = news_likes::Entity::find()
            .filter(news_likes::Column::NewsId.eq(news.id))
            .count(&db)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
