use serde::Deserialize;

/// On-disk configuration. Every field is optional; values given on the
/// command line (or through the environment) take precedence.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "target_urls")]
    pub urls: Option<Vec<String>>,
    pub urls_file: Option<String>,
    #[serde(alias = "concurrency_per_tick")]
    pub concurrency: Option<i64>,
    #[serde(alias = "tick_interval_ms")]
    pub interval_ms: Option<i64>,
    #[serde(alias = "duration_secs")]
    pub duration: Option<i64>,
    #[serde(alias = "request_timeout_ms")]
    pub timeout_ms: Option<i64>,
    pub seed: Option<u64>,
    pub no_linger: Option<bool>,
}
