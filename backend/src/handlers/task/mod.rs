mod abandon;
mod create;
mod delete;
mod list;
mod submissions;
mod submit;
mod take;
mod update;

use crate::{middlewares::AdminLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{get, patch, post},
    Router,
};

/// Routes for tasks
///
/// # Public
/// GET    /tasks
///
/// # Cadet actions
/// GET    /tasks/submissions
/// POST   /tasks/{id}/take
/// POST   /tasks/{id}/submit
/// POST   /tasks/{id}/abandon
///
/// # Admin actions
/// GET    /tasks/all
/// POST   /tasks
/// PATCH  /tasks/{id}
/// DELETE /tasks/{id}
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_active_tasks::<S>).post(create::create_task::<S>.layer(AdminLayer)),
        )
        .route("/all", get(list::list_all_tasks::<S>.layer(AdminLayer)))
        .route("/submissions", get(submissions::my_submissions::<S>))
        .route(
            "/{id}",
            patch(update::update_task::<S>.layer(AdminLayer))
                .delete(delete::delete_task::<S>.layer(AdminLayer)),
        )
        .route("/{id}/take", post(take::take_task::<S>))
        .route("/{id}/submit", post(submit::submit_task::<S>))
        .route("/{id}/abandon", post(abandon::abandon_task::<S>))
}
