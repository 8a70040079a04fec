//! Log sink for run outcomes and the global tracing subscriber.
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Name every line emitted by [`TracingLog::default`] is attributed to.
pub const DEFAULT_LOGGER_NAME: &str = "LOAD_TESTER";

/// Destination for status and outcome lines produced by a load run.
///
/// Implementations are called concurrently from every in-flight request and
/// must serialize their own writes.
pub trait LoadLog: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// [`LoadLog`] backed by `tracing` events carrying a `logger` field.
#[derive(Debug, Clone)]
pub struct TracingLog {
    name: String,
}

impl TracingLog {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TracingLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOGGER_NAME)
    }
}

impl LoadLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(logger = %self.name, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(logger = %self.name, "{}", message);
    }
}

pub fn init_logging(verbose: bool) {
    let filter = std::env::var("LOADPULSE_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
