mod auto;
mod manual;

use crate::{middlewares::AdminLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{delete, get},
    Router,
};

/// Routes for the achievement catalogs
///
/// GET    /achievements
/// POST   /achievements             (admin)
/// DELETE /achievements/{id}        (admin)
/// GET    /auto-achievements
/// POST   /auto-achievements        (admin)
/// DELETE /auto-achievements/{id}   (admin)
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/achievements",
            get(manual::list_achievements::<S>)
                .post(manual::create_achievement::<S>.layer(AdminLayer)),
        )
        .route(
            "/achievements/{id}",
            delete(manual::delete_achievement::<S>.layer(AdminLayer)),
        )
        .route(
            "/auto-achievements",
            get(auto::list_auto_achievements::<S>)
                .post(auto::create_auto_achievement::<S>.layer(AdminLayer)),
        )
        .route(
            "/auto-achievements/{id}",
            delete(auto::delete_auto_achievement::<S>.layer(AdminLayer)),
        )
}
