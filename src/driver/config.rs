use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ValidationError;

/// Raw load-test parameters as supplied by the caller.
///
/// Numeric fields are signed so that negative values coming from the CLI or a
/// config file are rejected by validation instead of at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTestConfig {
    pub target_urls: Vec<String>,
    pub concurrency_per_tick: i64,
    pub tick_interval_ms: i64,
    pub duration_secs: i64,
    pub request_timeout_ms: i64,
}

/// A validated [`LoadTestConfig`]. Immutable once built.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    targets: Arc<[String]>,
    fan_out: NonZeroUsize,
    tick_interval: Duration,
    duration: Duration,
    request_timeout: Duration,
}

impl LoadPlan {
    /// Validates `config`. Checks run in a fixed order and the first failure
    /// wins: concurrency, duration, targets, tick interval, request timeout.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first field that is out of range.
    pub fn from_config(config: LoadTestConfig) -> Result<Self, ValidationError> {
        let fan_out = usize::try_from(config.concurrency_per_tick)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ValidationError::InvalidConcurrency {
                value: config.concurrency_per_tick,
            })?;

        let duration = positive(config.duration_secs)
            .map(Duration::from_secs)
            .ok_or(ValidationError::InvalidDuration {
                value: config.duration_secs,
            })?;

        if config.target_urls.is_empty() {
            return Err(ValidationError::EmptyUrlList);
        }

        let tick_interval = positive(config.tick_interval_ms)
            .map(Duration::from_millis)
            .ok_or(ValidationError::InvalidTickInterval {
                value: config.tick_interval_ms,
            })?;

        let request_timeout = positive(config.request_timeout_ms)
            .map(Duration::from_millis)
            .ok_or(ValidationError::InvalidRequestTimeout {
                value: config.request_timeout_ms,
            })?;

        Ok(Self {
            targets: config.target_urls.into(),
            fan_out,
            tick_interval,
            duration,
            request_timeout,
        })
    }

    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    #[must_use]
    pub const fn fan_out(&self) -> NonZeroUsize {
        self.fan_out
    }

    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|value| *value > 0)
}
