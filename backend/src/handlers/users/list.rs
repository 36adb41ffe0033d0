use super::User;
use crate::{extractors::Json, Result, StateTrait};
use axum::extract::State;
use entity::users;
use sea_orm::{EntityTrait, QueryOrder};

pub async fn list_users<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<User>>> {
    let users = users::Entity::find()
        .order_by_asc(users::Column::Email)
        .all(state.db())
        .await?;

    Ok(Json(users.into_iter().map(User::from).collect()))
}
