pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadpulse/", env!("CARGO_PKG_VERSION"));

/// Requests fired on every tick.
pub const DEFAULT_CONCURRENCY: i64 = 3;
/// Milliseconds between ticks.
pub const DEFAULT_INTERVAL_MS: i64 = 400;
/// Total run time in seconds.
pub const DEFAULT_DURATION_SECS: i64 = 300;
/// Per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: i64 = 3000;
