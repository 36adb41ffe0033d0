mod achievement;
mod auth;
mod cadet;
mod news;
mod rating;
mod submission;
mod task;
mod users;

use crate::{error::Error, state::StateTrait, Result};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .nest("/auth", auth::routes::<S>())
                .nest("/users", users::routes::<S>())
                .nest("/cadets", cadet::routes::<S>())
                .route("/rating", get(rating::get_rating::<S>))
                .merge(achievement::routes::<S>())
                .nest("/news", news::routes::<S>())
                .nest("/tasks", task::routes::<S>())
                .nest("/submissions", submission::routes::<S>()),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}

/// Ids in paths that are not uuids cannot name an existing row.
fn parse_id(id: &str, not_found: Error<'static>) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| not_found)
}
