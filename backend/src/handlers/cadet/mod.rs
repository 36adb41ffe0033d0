mod achievements;
mod create;
mod delete;
mod get;
mod history;
mod list;
mod points;
mod scores;
mod update;

use crate::{middlewares::AdminLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{get, post},
    Router,
};

/// Routes for cadet profiles
///
/// # Public
/// GET    /cadets
/// GET    /cadets/{id}
/// GET    /cadets/{id}/scores
/// GET    /cadets/{id}/history
/// GET    /cadets/{id}/achievements
///
/// # Admin actions
/// POST   /cadets
/// PATCH  /cadets/{id}
/// DELETE /cadets/{id}
/// POST   /cadets/{id}/points
/// POST   /cadets/{id}/achievements
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_cadets::<S>).post(create::create_cadet::<S>.layer(AdminLayer)),
        )
        .route(
            "/{id}",
            get(get::get_cadet::<S>)
                .patch(update::update_cadet::<S>.layer(AdminLayer))
                .delete(delete::delete_cadet::<S>.layer(AdminLayer)),
        )
        .route("/{id}/scores", get(scores::get_scores::<S>))
        .route("/{id}/history", get(history::get_history::<S>))
        .route(
            "/{id}/achievements",
            get(achievements::list_awarded::<S>)
                .post(achievements::award_achievement::<S>.layer(AdminLayer)),
        )
        .route(
            "/{id}/points",
            post(points::award_points::<S>.layer(AdminLayer)),
        )
}
