use std::path::Path;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::LoadArgs;
use crate::driver::LoadTestConfig;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration file values to every argument the user did not set
/// on the command line or through the environment.
pub fn apply_config(args: &mut LoadArgs, matches: &ArgMatches, config: &ConfigFile) {
    if !is_cli(matches, "urls")
        && let Some(urls) = config.urls.as_ref()
    {
        args.urls.clone_from(urls);
    }

    if !is_cli(matches, "urls_file")
        && let Some(path) = config.urls_file.as_ref()
    {
        args.urls_file = Some(path.clone());
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = concurrency;
    }

    if !is_cli(matches, "interval_ms")
        && let Some(interval_ms) = config.interval_ms
    {
        args.interval_ms = interval_ms;
    }

    if !is_cli(matches, "duration_secs")
        && let Some(duration) = config.duration
    {
        args.duration_secs = duration;
    }

    if !is_cli(matches, "timeout_ms")
        && let Some(timeout_ms) = config.timeout_ms
    {
        args.timeout_ms = timeout_ms;
    }

    if !is_cli(matches, "seed")
        && let Some(seed) = config.seed
    {
        args.seed = Some(seed);
    }

    if !is_cli(matches, "no_linger")
        && let Some(no_linger) = config.no_linger
    {
        args.no_linger = no_linger;
    }
}

/// Builds the driver configuration from resolved arguments. Targets from
/// `--url` come first, followed by the lines of `--urls-file`.
///
/// # Errors
///
/// Returns an error when the URL file cannot be read or holds no URLs.
pub fn build_load_config(args: &LoadArgs) -> AppResult<LoadTestConfig> {
    let mut target_urls: Vec<String> = args
        .urls
        .iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
        .collect();

    if let Some(path) = args.urls_file.as_deref() {
        target_urls.extend(read_url_file(Path::new(path))?);
    }

    Ok(LoadTestConfig {
        target_urls,
        concurrency_per_tick: args.concurrency,
        tick_interval_ms: args.interval_ms,
        duration_secs: args.duration_secs,
        request_timeout_ms: args.timeout_ms,
    })
}

fn read_url_file(path: &Path) -> AppResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadUrlFile {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let urls: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect();
    if urls.is_empty() {
        return Err(AppError::config(ConfigError::UrlFileEmpty {
            path: path.to_path_buf(),
        }));
    }
    Ok(urls)
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
