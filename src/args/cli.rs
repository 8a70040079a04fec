use clap::Parser;

use super::defaults::{
    DEFAULT_CONCURRENCY, DEFAULT_DURATION_SECS, DEFAULT_INTERVAL_MS, DEFAULT_TIMEOUT_MS,
};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fixed-interval async HTTP load generator - fires a batch of GET requests at randomly chosen targets every tick for a bounded duration and logs every outcome."
)]
pub struct LoadArgs {
    /// Target URL (repeatable, or comma separated); each request picks one at random
    #[arg(long = "url", short = 'u', env = "LOADPULSE_URLS", value_delimiter = ',')]
    pub urls: Vec<String>,

    /// Read additional target URLs from a file, one per line
    #[arg(long = "urls-file")]
    pub urls_file: Option<String>,

    /// Requests fired on every tick
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value_t = DEFAULT_CONCURRENCY,
        allow_negative_numbers = true
    )]
    pub concurrency: i64,

    /// Time between ticks (milliseconds)
    #[arg(
        long = "interval",
        short = 'i',
        default_value_t = DEFAULT_INTERVAL_MS,
        allow_negative_numbers = true
    )]
    pub interval_ms: i64,

    /// Duration of the test (seconds)
    #[arg(
        long = "duration",
        short = 't',
        default_value_t = DEFAULT_DURATION_SECS,
        allow_negative_numbers = true
    )]
    pub duration_secs: i64,

    /// Per-request timeout (milliseconds)
    #[arg(
        long = "timeout",
        default_value_t = DEFAULT_TIMEOUT_MS,
        allow_negative_numbers = true
    )]
    pub timeout_ms: i64,

    /// Seed for target selection, for reproducible runs
    #[arg(long = "seed", env = "LOADPULSE_SEED")]
    pub seed: Option<u64>,

    /// Path to config file (TOML/JSON). Defaults to ./loadpulse.toml or ./loadpulse.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Exit as soon as the last tick fires instead of waiting one request timeout for in-flight outcomes
    #[arg(long = "no-linger")]
    pub no_linger: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADPULSE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
