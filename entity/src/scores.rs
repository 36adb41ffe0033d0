use super::{cadets, sea_orm_active_enums::Category};
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_SCORES: &str = "PK_scores";
    pub const UC_SCORES_CADET_ID: &str = "UC_scores_cadet_id";
    pub const FK_SCORES_CADET_ID: &str = "FK_scores_cadet_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub cadet_id: Uuid,
    pub study_score: i32,
    pub discipline_score: i32,
    pub events_score: i32,
    pub description: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "cadets::Entity",
        from = "Column::CadetId",
        to = "cadets::Column::Id",
        on_delete = "Cascade"
    )]
    Cadet,
}

impl Related<cadets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cadet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[inline]
    pub fn get(&self, category: Category) -> i32 {
        match category {
            Category::Study => self.study_score,
            Category::Discipline => self.discipline_score,
            Category::Events => self.events_score,
        }
    }

    #[inline]
    pub fn total(&self) -> i32 {
        self.study_score
            .saturating_add(self.discipline_score)
            .saturating_add(self.events_score)
    }

    /// These scores with `points` added to one category.
    ///
    /// `None` when the category or the total would leave the `i32` range.
    pub fn with_points(&self, category: Category, points: i32) -> Option<Model> {
        let mut next = self.clone();
        let value = match category {
            Category::Study => &mut next.study_score,
            Category::Discipline => &mut next.discipline_score,
            Category::Events => &mut next.events_score,
        };
        *value = value.checked_add(points)?;

        next.study_score
            .checked_add(next.discipline_score)?
            .checked_add(next.events_score)?;

        Some(next)
    }
}

impl Column {
    pub fn for_category(category: Category) -> Column {
        match category {
            Category::Study => Column::StudyScore,
            Category::Discipline => Column::DisciplineScore,
            Category::Events => Column::EventsScore,
        }
    }
}

impl Entity {
    #[inline]
    pub fn find_by_cadet(cadet_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::CadetId.eq(cadet_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn score(study: i32, discipline: i32, events: i32) -> Model {
        Model {
            id: Uuid::new_v4(),
            cadet_id: Uuid::new_v4(),
            study_score: study,
            discipline_score: discipline,
            events_score: events,
            description: String::new(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn points_go_to_one_category() {
        let next = score(10, 20, 30).with_points(Category::Discipline, -25).unwrap();

        assert_eq!((next.study_score, next.discipline_score, next.events_score), (10, -5, 30));
        assert_eq!(next.total(), 35);
    }

    #[test]
    fn category_overflow_is_refused() {
        assert!(score(i32::MAX - 5, 0, 0).with_points(Category::Study, 10).is_none());
        assert!(score(0, i32::MIN + 5, 0).with_points(Category::Discipline, -10).is_none());
    }

    #[test]
    fn total_overflow_is_refused() {
        let current = score(i32::MAX - 100, 0, 50);

        assert!(current.with_points(Category::Discipline, 100).is_none());
        assert!(current.with_points(Category::Discipline, 10).is_some());
    }
}
