use crate::{error, extractors::Session};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use futures::{future::BoxFuture, Future};
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Layer, Service};

/// Lets the request through only when the session belongs to an admin.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminLayer;

impl<S> Layer<S> for AdminLayer {
    type Service = Admin<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Admin { inner }
    }
}

#[derive(Debug, Clone)]
pub struct Admin<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for Admin<S>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Future + Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let allowed = req
            .extensions()
            .get::<Session>()
            .is_some_and(Session::is_admin);

        if !allowed {
            return Box::pin(async { Ok(error::NOT_ENOUGH_PERMISSIONS.into_response()) });
        }

        Box::pin(self.inner.call(req))
    }
}
