mod list;
mod review;

use crate::{middlewares::AdminLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{get, post},
    Router,
};

/// Routes for reviewing task submissions, admin only
///
/// GET  /submissions?status=
/// POST /submissions/{id}/review
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_submissions::<S>.layer(AdminLayer)))
        .route(
            "/{id}/review",
            post(review::review_submission::<S>.layer(AdminLayer)),
        )
}
