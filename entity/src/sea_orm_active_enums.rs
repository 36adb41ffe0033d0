use sea_orm::entity::prelude::*;
// DeriveActiveEnum expands to paths under `sea_query`
use sea_orm::sea_query;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[sea_orm(string_value = "study")]
    Study,
    #[sea_orm(string_value = "discipline")]
    Discipline,
    #[sea_orm(string_value = "events")]
    Events,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "cadet")]
    Cadet,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "hard")]
    Hard,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum RequirementType {
    #[sea_orm(string_value = "total_score")]
    TotalScore,
    #[sea_orm(string_value = "category_score")]
    CategoryScore,
}

/// Lifecycle of a cadet's claim on a task.
///
/// ```text
/// (none) -> taken -> submitted -> completed
///             |                -> rejected
///             +-> (none)   abandon
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[sea_orm(string_value = "taken")]
    Taken,
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl TaskStatus {
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Taken, TaskStatus::Submitted)
                | (TaskStatus::Submitted, TaskStatus::Completed | TaskStatus::Rejected)
        )
    }

    #[inline]
    pub fn can_abandon(self) -> bool {
        self == TaskStatus::Taken
    }

    #[inline]
    pub fn is_final(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn only_forward_transitions_are_allowed() {
        let allowed = [
            (TaskStatus::Taken, TaskStatus::Submitted),
            (TaskStatus::Submitted, TaskStatus::Completed),
            (TaskStatus::Submitted, TaskStatus::Rejected),
        ];

        for from in TaskStatus::iter() {
            for to in TaskStatus::iter() {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&(from, to)),
                    "{from:?} -> {to:?}"
                );
            }
        }
    }

    #[test]
    fn abandon_only_while_taken() {
        assert!(TaskStatus::Taken.can_abandon());
        assert!(!TaskStatus::Submitted.can_abandon());
        assert!(!TaskStatus::Completed.can_abandon());
        assert!(!TaskStatus::Rejected.can_abandon());
    }

    #[test]
    fn serde_uses_database_names() {
        assert_eq!(
            serde_json::to_string(&RequirementType::CategoryScore).unwrap(),
            r#""category_score""#
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>(r#""submitted""#).unwrap(),
            TaskStatus::Submitted
        );
    }
}
