use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppResult, RequestError};

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Capability to issue a single GET with a deadline.
///
/// The timeout covers the whole exchange, body included; exceeding it must
/// surface as [`RequestError::Timeout`].
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, RequestError>;
}

/// [`HttpGet`] over a shared, pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Builds a client with the crate user agent.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new() -> AppResult<Self> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self { client })
    }

    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpGet for ReqwestClient {
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, RequestError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| classify(err, timeout))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| classify(err, timeout))?;

        if !status.is_success() {
            return Err(RequestError::HttpErrorStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> RequestError {
    if err.is_timeout() {
        RequestError::Timeout {
            timeout_ms: timeout.as_millis(),
        }
    } else {
        RequestError::NetworkFailure {
            source: Box::new(err),
        }
    }
}
