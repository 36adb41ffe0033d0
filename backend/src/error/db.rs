use sea_orm::{DbErr, SqlErr};

/// Classifies constraint violations independently of the database backend.
pub trait DatabaseError {
    fn unique_violation(&self) -> bool;
    fn foreign_key_violation(&self) -> bool;

    /// A unique violation raised by one specific constraint.
    ///
    /// Postgres reports the constraint name, SQLite the `table.column` it covers.
    fn unique_violation_of(&self, constraint: &str, column: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    fn foreign_key_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }

    fn unique_violation_of(&self, constraint: &str, column: &str) -> bool {
        match self.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                message.contains(constraint) || message.contains(column)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing;
    use entity::users::constraints::{UC_USERS_CADET_ID, UC_USERS_EMAIL};
    use sea_orm::ActiveModelTrait;

    #[tokio::test]
    async fn tells_unique_constraints_apart() {
        let db = testing::database().await;
        let cadet = testing::cadet(&db).await;

        testing::user("first@example.com", Some(cadet.id))
            .insert(&db)
            .await
            .unwrap();

        let err = testing::user("second@example.com", Some(cadet.id))
            .insert(&db)
            .await
            .unwrap_err();

        assert!(err.unique_violation());
        assert!(err.unique_violation_of(UC_USERS_CADET_ID, "users.cadet_id"));
        assert!(!err.unique_violation_of(UC_USERS_EMAIL, "users.email"));

        let err = testing::user("first@example.com", None)
            .insert(&db)
            .await
            .unwrap_err();

        assert!(err.unique_violation_of(UC_USERS_EMAIL, "users.email"));
        assert!(!err.unique_violation_of(UC_USERS_CADET_ID, "users.cadet_id"));
    }

    #[tokio::test]
    async fn dangling_reference_is_a_foreign_key_violation() {
        let db = testing::database().await;

        let err = testing::user("ghost@example.com", Some(uuid::Uuid::new_v4()))
            .insert(&db)
            .await
            .unwrap_err();

        assert!(err.foreign_key_violation());
        assert!(!err.unique_violation());
    }
}
