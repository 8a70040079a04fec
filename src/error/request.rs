use thiserror::Error;

/// Failure of a single dispatched GET. Always logged by the dispatcher and
/// never propagated to the tick loop.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u128 },
    #[error("network failure: {source}")]
    NetworkFailure {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("request failed with status code {status}: {body}")]
    HttpErrorStatus { status: u16, body: String },
}

impl RequestError {
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
