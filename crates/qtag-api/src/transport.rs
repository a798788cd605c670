//! Authenticated JSON transport over the platform's REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use qtag_config::QtagConfig;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{check_response, read_json};

const X_REQUESTED_WITH: &str = "x-requested-with";

/// Issues GET/POST requests for a URI suffix such as
/// `/qps/rest/2.0/get/am/hostasset/42` and returns the decoded JSON body.
///
/// Implementations do not retry: a failed call surfaces immediately.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` relative to the configured endpoint.
    async fn get(&self, path: &str) -> Result<Value, ApiError>;

    /// POST `body` as JSON to `path` relative to the configured endpoint.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}

/// [`Transport`] backed by `reqwest`, authenticating every request with HTTP
/// basic auth and an `X-Requested-With` client header.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotConfigured`] if the endpoint or credentials are
    /// missing or the client name is not a valid header value, and
    /// [`ApiError::Http`] if the underlying client fails to build.
    pub fn new(config: &QtagConfig) -> Result<Self, ApiError> {
        if !config.api.is_configured() {
            return Err(ApiError::NotConfigured("api.url is empty".into()));
        }
        if !config.credentials.is_configured() {
            return Err(ApiError::NotConfigured(
                "credentials.username or credentials.password is empty".into(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(X_REQUESTED_WITH),
            HeaderValue::from_str(&config.api.client_name).map_err(|_| {
                ApiError::NotConfigured(format!(
                    "api.client_name '{}' is not a valid header value",
                    config.api.client_name
                ))
            })?,
        );

        let http = reqwest::Client::builder()
            .user_agent(concat!("qtag/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api.url.trim_end_matches('/').to_string(),
            username: config.credentials.username.clone(),
            password: config.credentials.password.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        read_json(check_response(resp).await?).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, %body, "POST");
        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;
        read_json(check_response(resp).await?).await
    }
}
