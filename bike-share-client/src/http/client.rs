//! Raw HTTP access to the bike-share backend.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::error::HttpError;

/// Default backend origin.
const DEFAULT_BASE_URL: &str = "https://bike-share-widget.vercel.app";

/// Longest response body kept in a [`HttpError::BadResponse`].
const ERROR_BODY_LIMIT: usize = 500;

/// Raw request/response access to one backend origin.
///
/// `path` is appended to the origin (e.g. `/api/v1/baywheels/stations`).
/// Implementations return the body bytes only for a 200 response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path`, with `query` URL-encoded in the given order.
    async fn get_raw(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, HttpError>;

    /// POST `form` as an `application/x-www-form-urlencoded` body.
    async fn post_raw(&self, path: &str, form: &[(&str, String)]) -> Result<Vec<u8>, HttpError>;
}

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Backend origin, without a trailing slash
    pub base_url: String,
}

impl ApiClientConfig {
    /// Create a config pointing at the production backend.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing or self-hosting).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// reqwest-backed [`Transport`].
///
/// Timeouts and redirects are left at reqwest's defaults and nothing is
/// retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the configured origin.
    pub fn new(config: ApiClientConfig) -> Result<Self, HttpError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for `path` with `query` appended.
    pub fn endpoint_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, HttpError> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| HttpError::BadUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(HttpError::BadUrl {
                url: raw,
                reason: "not a hierarchical URL".to_string(),
            });
        }

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn read_ok(response: reqwest::Response) -> Result<Vec<u8>, HttpError> {
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::BadResponse {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get_raw(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, HttpError> {
        let url = self.endpoint_url(path, query)?;
        debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        Self::read_ok(response).await
    }

    async fn post_raw(&self, path: &str, form: &[(&str, String)]) -> Result<Vec<u8>, HttpError> {
        let url = self.endpoint_url(path, &[])?;
        debug!(%url, fields = form.len(), "POST");

        let response = self.http.post(url).form(form).send().await?;
        Self::read_ok(response).await
    }
}
