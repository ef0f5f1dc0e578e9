//! HTTP client wrapper.
//!
//! Owns the transport concerns shared by every backend call: the fixed
//! default headers, the bearer token loaded from the token repository
//! before each request, the per-request timeout, and failure
//! classification. No retries, no caching; each call is independent.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use redaai_core::repository::TokenRepository;

use crate::config::ApiConfig;
use crate::problem::{ApiProblem, ApiResult};

/// Shared HTTP client for the backend gateway.
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenRepository>,
}

impl ApiClient {
    /// Builds the client with the deployment's default headers.
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenRepository>) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&config.api_key).map_err(|_| ApiProblem::Unknown)?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|_| ApiProblem::Unknown)?;

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    /// POSTs a JSON body and decodes a JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(path, body).await?;
        response.json::<T>().await.map_err(|e| {
            warn!(%path, error = %e, "failed to decode response body");
            ApiProblem::BadData
        })
    }

    /// POSTs a JSON body and discards the response body.
    ///
    /// For endpoints whose success body carries no information.
    pub async fn post_ignoring_body<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(path, body).await?;
        Ok(())
    }

    async fn send<B>(&self, path: &str, body: &B) -> ApiResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url, path);

        let mut request = self
            .client
            .post(&url)
            .json(body)
            .timeout(self.config.timeout);

        // The token may be absent (pre-login calls); the request then
        // goes out without an Authorization header.
        match self.tokens.load().await {
            Ok(Some(token)) => {
                request = request.header("Authorization", format!("Bearer {}", token));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "failed to load auth token, sending request without it");
            }
        }

        debug!(%url, "sending request");
        let response = request.send().await.map_err(ApiProblem::from)?;

        let status = response.status();
        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "request failed");
            return Err(ApiProblem::from_status(status));
        }

        Ok(response)
    }
}
