// ABOUTME: HTTP collaborator for the Launchpad API.
// ABOUTME: ApiTransport trait plus the reqwest-backed implementation used in production.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

/// Errors from an API request. Non-2xx responses are failures.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("{method} request failed: {message}")]
    Request {
        method: &'static str,
        message: String,
    },

    #[error("{method} request returned HTTP {status}: {body}")]
    Status {
        method: &'static str,
        status: u16,
        body: String,
    },

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Sends JSON requests to the API host.
///
/// Paths are relative to the host and start with `/`.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError>;
}

/// [`ApiTransport`] over HTTPS using reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("launchpad/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Deadline for each whole request, body included.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: &'static str,
        request: RequestBuilder,
    ) -> Result<Value, TransportError> {
        // URLs can embed the API key, so they are stripped from reqwest errors.
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request {
                method,
                message: e.without_url().to_string(),
            })?;

        let status = response.status();
        tracing::debug!(method, status = status.as_u16(), "API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                method,
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Request {
                    method,
                    message: e.without_url().to_string(),
                }
            } else {
                TransportError::Decode(e.without_url().to_string())
            }
        })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.send("GET", self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.send("POST", self.client.post(self.url(path)).json(&body))
            .await
    }
}
