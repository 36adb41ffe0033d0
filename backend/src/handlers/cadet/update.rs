use crate::{
    error,
    extractors::{Json, ValidatedJson},
    handlers::parse_id,
    utils::set_option,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::cadets;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 128))]
    name: Option<String>,
    #[validate(length(min = 1, max = 16))]
    platoon: Option<String>,
    #[validate(range(min = 1, max = 9))]
    squad: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    avatar_url: Option<Option<String>>,
}

pub async fn update_cadet<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<cadets::Model>> {
    let id = parse_id(&id, error::CADET_NOT_FOUND)?;

    let active_model = cadets::ActiveModel {
        id: Set(id),
        name: set_option(request.name),
        platoon: set_option(request.platoon),
        squad: set_option(request.squad),
        avatar_url: set_option(request.avatar_url),
        ..Default::default()
    };

    let txn = state.db().begin().await?;

    // an update without columns is not valid sql
    if !active_model.is_changed() {
        let cadet = cadets::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(error::CADET_NOT_FOUND)?;
        return Ok(Json(cadet));
    }

    let cadet = match cadets::Entity::update(active_model).exec(&txn).await {
        Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
            return Err(error::CADET_NOT_FOUND)
        }
        r => r?,
    };

    txn.commit().await?;

    Ok(Json(cadet))
}
