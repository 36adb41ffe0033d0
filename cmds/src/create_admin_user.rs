//! Creates an admin account, or resets the password of an existing one.
//!
//! Usage: `create_admin_user <email> [name]`. Prints the generated password.

use anyhow::{anyhow, Context};
use cadet_rating_backend::password;
use chrono::Utc;
use dotenvy::dotenv;
use entity::{sea_orm_active_enums::Role, users};
use rand::distributions::{Alphanumeric, DistString};
use sea_orm::{ActiveModelTrait, Database, IntoActiveModel, Set};
use std::env::{self, args};
use uuid::Uuid;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let email = args()
        .nth(1)
        .ok_or_else(|| anyhow!("no email given"))?
        .trim()
        .to_lowercase();
    let name = args().nth(2).unwrap_or_else(|| "Administrator".to_owned());

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let database = Database::connect(database_url).await?;

    let secret = Alphanumeric.sample_string(&mut rand::thread_rng(), 20);
    let password_hash = password::hash(&secret).map_err(|err| anyhow!("{err}"))?;

    match users::Entity::find_by_email(&email).one(&database).await? {
        Some(user) => {
            let mut user = user.into_active_model();
            user.password_hash = Set(password_hash);
            user.role = Set(Role::Admin);
            user.update(&database).await?;

            println!("updated {email}");
        }
        None => {
            users::ActiveModel {
                id: Set(Uuid::new_v4()),
                email: Set(email.clone()),
                name: Set(name),
                password_hash: Set(password_hash),
                role: Set(Role::Admin),
                cadet_id: Set(None),
                created_at: Set(Utc::now()),
            }
            .insert(&database)
            .await?;

            println!("created {email}");
        }
    }

    println!("password: {secret}");

    Ok(())
}
