use crate::{
    error::{self, Error},
    extractors::{Json, ValidatedJson},
    handlers::parse_id,
    utils::scoring::{self, Award},
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::{cadets, scores, sea_orm_active_enums::Category};
use sea_orm::{EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Deserialize, Validate)]
#[validate(schema(function = "non_zero"))]
pub struct Request {
    category: Category,
    #[validate(range(min = -10000, max = 10000))]
    points: i32,
    #[validate(length(min = 1, max = 512))]
    description: String,
}

fn non_zero(request: &Request) -> std::result::Result<(), ValidationError> {
    if request.points == 0 {
        return Err(ValidationError::new("zero_points"));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct Response {
    cadet: cadets::Model,
    scores: scores::Model,
}

pub async fn award_points<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let id = parse_id(&id, error::CADET_NOT_FOUND)?;

    let txn = state.db().begin().await?;

    let scores = scoring::award_points(
        &txn,
        id,
        Award {
            category: request.category,
            points: request.points,
            description: request.description,
        },
    )
    .await?;

    let cadet = cadets::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::internal("awarded cadet vanished"))?;

    txn.commit().await?;

    info!(
        cadet_id = id.to_string(),
        points = request.points,
        "awarded points"
    );

    Ok(Json(Response { cadet, scores }))
}
