//! HTTP transport for the Fantasy Premier League API.
//!
//! Everything above this module talks to a [`Transport`]: a GET against a fixed
//! base URL that yields a status code and a body. [`HttpTransport`] is the
//! `reqwest` implementation; tests swap in [`StubTransport`](crate::testing::StubTransport).

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    core::ClientConfig,
    error::{FplError, TransportError},
    Result,
};

#[cfg(test)]
mod tests;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Absolute URL for an endpoint path, used for requests and error messages.
    fn url(&self, path: &str) -> String;

    /// Issue a GET for `path`. Non-2xx statuses are returned, not raised.
    async fn get(&self, path: &str) -> std::result::Result<RawResponse, TransportError>;

    /// Release pooled connections. Later calls to `get` fail with `TransportError::Closed`.
    async fn close(&self);
}

/// GET `path` and decode the body as JSON without checking its shape.
///
/// Non-2xx statuses become `DataFetch`, or `AuthenticationRequired` for 401/403.
pub async fn get_json(transport: &dyn Transport, path: &str) -> Result<Value> {
    let url = transport.url(path);
    let response = transport
        .get(path)
        .await
        .map_err(|e| FplError::from_transport(url.clone(), e))?;

    if !response.is_success() {
        warn!(status = response.status, %url, "non-success response");
        let source = TransportError::Status {
            status: response.status,
            url: url.clone(),
        };
        return Err(FplError::from_transport(url, source));
    }

    serde_json::from_slice(&response.body)
        .map_err(|e| FplError::schema("JSON document", format!("{url}: {e}")))
}

/// `reqwest`-backed transport.
#[derive(Debug)]
pub struct HttpTransport {
    client: RwLock<Option<Client>>,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| FplError::from_transport(config.base_url.clone(), e.into()))?;

        Ok(Self {
            client: RwLock::new(Some(client)),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn client(&self) -> Option<Client> {
        self.client
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[instrument(skip(self))]
    async fn get(&self, path: &str) -> std::result::Result<RawResponse, TransportError> {
        let client = self.client().ok_or(TransportError::Closed)?;
        let url = self.url(path);
        debug!(%url, "GET");

        let response = client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(status, bytes = body.len(), "response received");
        Ok(RawResponse { status, body })
    }

    async fn close(&self) {
        // Dropping the last `Client` handle tears down its connection pool.
        let previous = self
            .client
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if previous.is_some() {
            debug!(base_url = %self.base_url, "transport closed");
        }
    }
}
