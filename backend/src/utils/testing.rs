use chrono::Utc;
use entity::{cadets, news, sea_orm_active_enums::Role, users};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DbConn, Set};
use serde_json::json;
use uuid::Uuid;

/// A migrated in-memory database on a single connection.
pub async fn database() -> DbConn {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);

    let db = Database::connect(opts).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    db
}

pub async fn cadet(db: &DbConn) -> cadets::Model {
    cadets::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Test Cadet".to_owned()),
        platoon: Set("10-1".to_owned()),
        squad: Set(1),
        rank: Set(0),
        total_score: Set(0),
        avatar_url: Set(None),
        join_date: Set(Utc::now().date_naive()),
    }
    .insert(db)
    .await
    .unwrap()
}

pub fn user(email: &str, cadet_id: Option<Uuid>) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_owned()),
        name: Set("Test User".to_owned()),
        password_hash: Set("not-a-hash".to_owned()),
        role: Set(Role::Cadet),
        cadet_id: Set(cadet_id),
        created_at: Set(Utc::now()),
    }
}

pub async fn news(db: &DbConn) -> news::Model {
    news::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Test news".to_owned()),
        content: Set(String::new()),
        author: Set("Test Admin".to_owned()),
        is_main: Set(false),
        background_image_url: Set(None),
        images: Set(json!([])),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .unwrap()
}
