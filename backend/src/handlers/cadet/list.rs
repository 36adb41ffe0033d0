use crate::{
    extractors::{Json, Query, Session},
    utils::contains_pattern,
    Result, StateTrait,
};
use axum::extract::State;
use entity::{cadets, users};
use sea_orm::{
    sea_query::{Expr, Func},
    Condition, JoinType, QueryFilter, QuerySelect, RelationTrait,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Params {
    platoon: Option<String>,
    squad: Option<i32>,
    search: Option<String>,
}

/// Search matches the cadet's name; for admins also the linked account's email.
pub async fn list_cadets<S: StateTrait>(
    State(state): State<S>,
    session: Option<Session>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<cadets::Model>>> {
    let filter = cadets::Filter {
        platoon: params.platoon.as_deref(),
        squad: params.squad,
    };

    let mut query = cadets::Entity::find_ranked(&filter);

    if let Some(search) = params.search.as_deref().map(str::trim) {
        if !search.is_empty() {
            let needle = search.to_lowercase();

            let mut condition = Condition::any().add(
                Expr::expr(Func::lower(Expr::col((cadets::Entity, cadets::Column::Name))))
                    .like(contains_pattern(&needle)),
            );

            if session.as_ref().is_some_and(Session::is_admin) {
                query = query.join(JoinType::LeftJoin, users::Relation::Cadet.def().rev());
                condition = condition.add(
                    Expr::expr(Func::lower(Expr::col((users::Entity, users::Column::Email))))
                        .like(contains_pattern(&needle)),
                );
            }

            query = query.filter(condition);
        }
    }

    let cadets = query.all(state.db()).await?;

    Ok(Json(cadets))
}
