use crate::{response::TestResponse, UserLike};
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;

#[derive(Debug)]
pub struct RequestBuilder {
    builder: reqwest::RequestBuilder,
}

impl RequestBuilder {
    pub(crate) fn new(builder: reqwest::RequestBuilder) -> Self {
        RequestBuilder { builder }
    }

    pub async fn send(self) -> TestResponse {
        TestResponse::new(self.builder.send().await.expect("failed to send request"))
    }

    pub fn json<T>(mut self, value: &T) -> RequestBuilder
    where
        T: Serialize,
    {
        self.builder = self.builder.json(value);
        self
    }

    pub fn user(mut self, user: &impl UserLike) -> RequestBuilder {
        self.builder = self.builder.bearer_auth(user.access_token());
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> RequestBuilder
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        self.builder = self.builder.header(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<reqwest::Body>) -> RequestBuilder {
        self.builder = self.builder.body(body);
        self
    }
}
