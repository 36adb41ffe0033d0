use cadet_rating_backend::password;
use chrono::Utc;
use entity::{sea_orm_active_enums::Role, users};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, DbConn, Set};
use tracing::log::LevelFilter;
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-password";
pub const ADMIN_NAME: &str = "Test Admin";

/// A fresh, migrated in-memory database holding one admin account.
///
/// The pool keeps exactly one connection: every connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn setup() -> DbConn {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging_level(LevelFilter::Debug);

    let conn = sea_orm::Database::connect(opts)
        .await
        .expect("failed to open in-memory database");

    migration::Migrator::up(&conn, None)
        .await
        .expect("failed to apply migrations");

    users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(ADMIN_EMAIL.to_owned()),
        name: Set(ADMIN_NAME.to_owned()),
        password_hash: Set(password::hash(ADMIN_PASSWORD).expect("failed to hash password")),
        role: Set(Role::Admin),
        cadet_id: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(&conn)
    .await
    .expect("failed to seed admin");

    conn
}
