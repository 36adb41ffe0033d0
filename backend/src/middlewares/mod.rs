mod admin;
mod claims;

use crate::StateTrait;
pub use admin::*;
use axum::{http::header::AUTHORIZATION, middleware, Router};
use std::iter;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    ServiceBuilderExt,
};

pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middlewares = ServiceBuilder::new()
        .catch_panic()
        .sensitive_headers(iter::once(AUTHORIZATION))
        .set_x_request_id(tower_http::request_id::MakeRequestUuid)
        .propagate_x_request_id()
        .layer(TimeoutLayer::new(state.config().request_timeout))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            claims::get_claims::<S>,
        ))
        .compression()
        .decompression()
        .layer(cors_layer)
        .into_inner();

    router.layer(middlewares).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, State};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use std::{collections::HashMap, sync::Arc, time::Duration};
    use tower::ServiceExt;

    async fn state(request_timeout: Duration) -> Arc<State> {
        let vars = HashMap::from([("DATABASE_URL", "sqlite::memory:"), ("JWT_SECRET", "secret")]);
        let mut config = Config::from_lookup(|name| vars.get(name).map(|v| (*v).to_owned())).unwrap();
        config.request_timeout = request_timeout;

        let db = crate::utils::testing::database().await;

        State::with_database(config, db)
    }

    fn app(state: Arc<State>) -> Router {
        let routes = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .route("/fast", get(|| async { "ok" }));

        middlewares(state, routes)
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn slow_request_times_out() {
        let app = app(state(Duration::from_millis(50)).await);

        let response = app.oneshot(request("/slow")).await.unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn fast_request_is_served() {
        let app = app(state(Duration::from_millis(500)).await);

        let response = app.oneshot(request("/fast")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }
}
