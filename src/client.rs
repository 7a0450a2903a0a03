//! Shared connection handle for the backend REST API.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Shared handle to the backend.
///
/// Holds one connection pool plus the project headers attached to every
/// request. Construct it once at process start and clone it into each
/// accessor; clones share the underlying pool and are safe for concurrent
/// use. No retries, no extra timeouts, no cancellation: a hung remote call
/// hangs its caller.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
}

impl Client {
    /// Creates a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id or API key cannot be used as a
    /// header value, or if the HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Appwrite-Project",
            HeaderValue::from_str(&config.project_id)
                .map_err(|e| StoreError::configuration(format!("project id: {e}")))?,
        );
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| StoreError::configuration(format!("api key: {e}")))?;
            value.set_sensitive(true);
            headers.insert("X-Appwrite-Key", value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::configuration(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
        })
    }

    /// Underlying HTTP client.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Joins a route onto the backend endpoint.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }

    /// Base endpoint URL, without trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Project identifier this client is bound to.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// Decodes a JSON success body, or maps the status into a `StoreError`.
pub(crate) async fn json_body<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &'static str,
) -> StoreResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::from_status(status, context));
    }
    response
        .json()
        .await
        .map_err(|e| StoreError::invalid_response(format!("{context}: {e}")))
}

/// Checks the status of a response whose body is not needed.
pub(crate) async fn empty_body(
    response: reqwest::Response,
    context: &'static str,
) -> StoreResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(StoreError::from_status(status, context))
    }
}
