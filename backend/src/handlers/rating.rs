use crate::{
    extractors::{Json, Query},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{cadets, scores, sea_orm_active_enums::Category};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    #[default]
    Total,
    Study,
    Discipline,
    Events,
}

impl Ordering {
    fn category(self) -> Option<Category> {
        match self {
            Ordering::Total => None,
            Ordering::Study => Some(Category::Study),
            Ordering::Discipline => Some(Category::Discipline),
            Ordering::Events => Some(Category::Events),
        }
    }
}

#[derive(Deserialize)]
pub struct Params {
    platoon: Option<String>,
    squad: Option<i32>,
    #[serde(default)]
    category: Ordering,
}

#[derive(Serialize)]
pub struct Entry {
    #[serde(flatten)]
    cadet: cadets::Model,
    study_score: i32,
    discipline_score: i32,
    events_score: i32,
}

impl Entry {
    fn get(&self, category: Category) -> i32 {
        match category {
            Category::Study => self.study_score,
            Category::Discipline => self.discipline_score,
            Category::Events => self.events_score,
        }
    }
}

/// Cadets with their category breakdown, in one query.
pub async fn get_rating<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<Entry>>> {
    let filter = cadets::Filter {
        platoon: params.platoon.as_deref(),
        squad: params.squad,
    };

    let rows = cadets::Entity::find_ranked(&filter)
        .find_also_related(scores::Entity)
        .all(state.db())
        .await?;

    let mut entries: Vec<Entry> = rows
        .into_iter()
        .map(|(cadet, score)| {
            let (study_score, discipline_score, events_score) = score
                .map(|s| (s.study_score, s.discipline_score, s.events_score))
                .unwrap_or_default();

            Entry {
                cadet,
                study_score,
                discipline_score,
                events_score,
            }
        })
        .collect();

    // stable, so equal category scores keep rank order
    if let Some(category) = params.category.category() {
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.get(category)));
    }

    Ok(Json(entries))
}
