use std::time::Duration;

use http::header::AUTHORIZATION;
use reqwest::IntoUrl;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

use crate::{RequestBuilder, Result};

#[derive(Debug, Clone)]
pub struct HttpClient(ClientWithMiddleware);

#[derive(Default, Debug)]
pub struct HttpClientBuilder {
    client: reqwest::ClientBuilder,
    max_retries: u32,
    bearer_token: Option<String>,
}

impl HttpClient {
    fn new_with(inner: reqwest::Client, max_retries: u32) -> Self {
        let client = ClientBuilder::new(inner)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(max_retries),
            ))
            .build();

        Self(client)
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn put(&self, url: impl IntoUrl) -> RequestBuilder {
        RequestBuilder(self.0.put(url))
    }
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies to the whole request, including connecting and reading the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut client = self.client;

        if let Some(token) = self.bearer_token {
            let mut headers = reqwest::header::HeaderMap::new();
            let mut value = http::HeaderValue::try_from(format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            client = client.default_headers(headers);
        }

        Ok(HttpClient::new_with(client.build()?, self.max_retries))
    }
}
