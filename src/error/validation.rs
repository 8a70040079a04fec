use thiserror::Error;

/// Rejections raised while turning a `LoadTestConfig` into a runnable plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("concurrency_per_tick must be at least 1, but the actual value is: {value}")]
    InvalidConcurrency { value: i64 },
    #[error("duration_secs must be greater than 0, but the actual value is: {value}")]
    InvalidDuration { value: i64 },
    #[error("target_urls must contain at least one url")]
    EmptyUrlList,
    #[error("tick_interval_ms must be greater than 0, but the actual value is: {value}")]
    InvalidTickInterval { value: i64 },
    #[error("request_timeout_ms must be greater than 0, but the actual value is: {value}")]
    InvalidRequestTimeout { value: i64 },
}

impl ValidationError {
    /// Name of the configuration field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidConcurrency { .. } => "concurrency_per_tick",
            Self::InvalidDuration { .. } => "duration_secs",
            Self::EmptyUrlList => "target_urls",
            Self::InvalidTickInterval { .. } => "tick_interval_ms",
            Self::InvalidRequestTimeout { .. } => "request_timeout_ms",
        }
    }
}
