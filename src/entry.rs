use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches};
use tracing::{debug, info};

use loadpulse::args::LoadArgs;
use loadpulse::config::{apply_config, build_load_config, load_config};
use loadpulse::driver::{LoadDriver, RandomPicker};
use loadpulse::error::AppResult;
use loadpulse::http::{HttpGet, ReqwestClient};
use loadpulse::logger::{LoadLog, TracingLog, init_logging};

pub(crate) fn run() -> AppResult<()> {
    let matches = LoadArgs::command().get_matches();
    let mut args = LoadArgs::from_arg_matches(&matches)?;

    init_logging(args.verbose);

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: LoadArgs) -> AppResult<()> {
    let config = build_load_config(&args)?;
    let log: Arc<dyn LoadLog> = Arc::new(TracingLog::default());
    let client: Arc<dyn HttpGet> = Arc::new(ReqwestClient::new()?);
    let picker = args
        .seed
        .map_or_else(RandomPicker::from_entropy, RandomPicker::seeded);

    let driver = LoadDriver::new(config, client, log)?.with_picker(picker);
    let plan = driver.plan();
    let linger = plan.request_timeout();
    info!(
        targets = plan.targets().len(),
        fan_out = plan.fan_out().get(),
        interval_ms = plan.tick_interval().as_millis(),
        duration_secs = plan.duration().as_secs(),
        timeout_ms = linger.as_millis(),
        "Starting load test"
    );

    let report = driver.run().completed().await?;
    debug!(ticks = report.ticks, requests = report.requests, "Tick loop finished");

    if !args.no_linger {
        debug!(linger_ms = linger.as_millis(), "Waiting for in-flight requests");
        tokio::time::sleep(linger).await;
    }

    Ok(())
}
