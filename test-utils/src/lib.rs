mod db;
pub mod macros;
pub mod prelude;
mod request;
mod response;
mod user;

use cadet_rating_backend::{Config, State};
pub use db::{ADMIN_EMAIL, ADMIN_NAME, ADMIN_PASSWORD};
use dotenvy::dotenv;
use http::StatusCode;
pub use macros::macro_support;
use request::*;
use reqwest::Client;
use response::TestResponse;
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{net::TcpListener, sync::oneshot};
pub use user::*;
use uuid::Uuid;

#[derive(Debug)]
pub struct AppInner {
    addr: SocketAddr,
}

/// One running server over its own fresh database.
#[derive(Clone, Debug)]
pub struct App {
    inner: Arc<AppInner>,
}

impl App {
    pub async fn new() -> Self {
        dotenv().ok();

        let (tx, rx) = oneshot::channel();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(async {
                tracing::trace!("setting up database");

                let conn = db::setup().await;

                let vars = HashMap::from([
                    ("DATABASE_URL", "sqlite::memory:".to_owned()),
                    ("JWT_SECRET", uuid()),
                ]);
                let config = Config::from_lookup(|name| vars.get(name).cloned())
                    .expect("invalid test config");

                tracing::trace!("binding socket");

                let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
                let listener = TcpListener::bind(addr)
                    .await
                    .expect("failed to bind tcp listener");
                let state = State::with_database(config, conn);

                let inner = Arc::new(AppInner {
                    addr: listener.local_addr().unwrap(),
                });

                tx.send(inner).unwrap();

                tracing::trace!("starting app");

                cadet_rating_backend::run(listener, state).await.unwrap();
            });
        });

        App {
            inner: rx.await.unwrap(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.post("/v1/auth/login")
            .json(&json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
    }

    async fn login_as(&self, email: &str, password: &str) -> User {
        let res = self.login(email, password).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        let user = &body["user"];

        User {
            id: user["id"].as_str().unwrap().to_owned(),
            email: user["email"].as_str().unwrap().to_owned(),
            name: user["name"].as_str().unwrap().to_owned(),
            cadet_id: user["cadet_id"].as_str().map(str::to_owned),
            access_token: body["token"].as_str().unwrap().to_owned(),
        }
    }

    /// Signs in as the seeded admin.
    pub async fn admin(&self) -> User {
        self.login_as(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Creates a cadet through the API and returns its JSON.
    pub async fn create_cadet(&self, name: &str, platoon: &str, squad: i32) -> Value {
        let admin = self.admin().await;

        let res = self
            .post("/v1/cadets")
            .user(&admin)
            .json(&json!({
                "name": name,
                "platoon": platoon,
                "squad": squad,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        res.json().await
    }

    /// Creates a cadet with a linked account and signs that account in.
    pub async fn register_cadet(&self) -> User {
        let name = format!("Cadet {}", &uuid()[..8]);
        let cadet = self.create_cadet(&name, "10-1", 1).await;
        let email = format!("{}@example.com", uuid());
        let password = "cadet-password";

        let admin = self.admin().await;
        let res = self
            .post("/v1/users")
            .user(&admin)
            .json(&json!({
                "email": email,
                "name": name,
                "password": password,
                "role": "cadet",
                "cadet_id": cadet["id"],
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        self.login_as(&email, password).await
    }

    /// Creates an active task due tomorrow.
    pub async fn create_task(&self, category: &str, points: i32) -> Value {
        let admin = self.admin().await;
        let deadline = chrono::Utc::now() + chrono::Duration::days(1);

        let res = self
            .post("/v1/tasks")
            .user(&admin)
            .json(&json!({
                "title": format!("Task {}", &uuid()[..8]),
                "description": "do the thing",
                "category": category,
                "difficulty": "medium",
                "points": points,
                "deadline": deadline,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        res.json().await
    }

    pub async fn award(&self, cadet_id: &str, category: &str, points: i32) {
        let admin = self.admin().await;

        let res = self
            .post(&format!("/v1/cadets/{cadet_id}/points"))
            .user(&admin)
            .json(&json!({
                "category": category,
                "points": points,
                "description": "test award",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().get(format!("http://{}{}", self.inner.addr, url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().post(format!("http://{}{}", self.inner.addr, url)))
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().patch(format!("http://{}{}", self.inner.addr, url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().delete(format!("http://{}{}", self.inner.addr, url)))
    }
}

pub fn uuid() -> String {
    Uuid::new_v4()
        .as_simple()
        .encode_lower(&mut Uuid::encode_buffer())
        .to_owned()
}
