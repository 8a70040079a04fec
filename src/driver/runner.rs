use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::error::{AppResult, ValidationError};
use crate::http::HttpGet;
use crate::logger::LoadLog;

use super::config::{LoadPlan, LoadTestConfig};
use super::dispatch::spawn_request;
use super::picker::{RandomPicker, TargetPicker};

/// Counters for a run that reached its deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Ticks that dispatched a batch.
    pub ticks: u64,
    /// Requests dispatched across all ticks.
    pub requests: u64,
}

/// Owns a validated plan and the collaborators needed to execute it.
pub struct LoadDriver {
    plan: LoadPlan,
    client: Arc<dyn HttpGet>,
    log: Arc<dyn LoadLog>,
    picker: Box<dyn TargetPicker>,
}

impl std::fmt::Debug for LoadDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadDriver")
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}

impl LoadDriver {
    /// Validates `config` and builds a driver that picks targets uniformly at
    /// random.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found. The failure is written to
    /// `log` at error level before it is returned.
    pub fn new(
        config: LoadTestConfig,
        client: Arc<dyn HttpGet>,
        log: Arc<dyn LoadLog>,
    ) -> Result<Self, ValidationError> {
        let plan = LoadPlan::from_config(config).inspect_err(|err| log.error(&err.to_string()))?;
        Ok(Self {
            plan,
            client,
            log,
            picker: Box::new(RandomPicker::from_entropy()),
        })
    }

    #[must_use]
    pub fn with_picker<P>(mut self, picker: P) -> Self
    where
        P: TargetPicker + 'static,
    {
        self.picker = Box::new(picker);
        self
    }

    #[must_use]
    pub const fn plan(&self) -> &LoadPlan {
        &self.plan
    }

    /// Starts the tick loop on the current tokio runtime and returns
    /// immediately.
    ///
    /// The deadline is fixed at the moment of the call. The first tick fires
    /// one full interval later; every tick before the deadline spawns
    /// `fan_out` requests without waiting on them, and the first tick at or
    /// past the deadline stops the timer. Requests still in flight at that
    /// point are left to finish on their own.
    #[must_use = "dropping the handle detaches the run; await `completed` to observe the end"]
    pub fn run(self) -> RunHandle {
        let started = Instant::now();
        RunHandle {
            task: tokio::spawn(self.tick_loop(started)),
        }
    }

    async fn tick_loop(mut self, started: Instant) -> RunReport {
        let period = self.plan.tick_interval();
        let deadline = started.checked_add(self.plan.duration());
        let first_tick = started.checked_add(period).unwrap_or(started);
        let mut ticker = interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut report = RunReport::default();
        loop {
            ticker.tick().await;
            if deadline.is_some_and(|end| Instant::now() >= end) {
                self.log.info(&format!(
                    "Load test completed: {} ticks, {} requests dispatched",
                    report.ticks, report.requests
                ));
                return report;
            }

            let dispatched = self.dispatch_batch();
            report.ticks = report.ticks.saturating_add(1);
            report.requests = report.requests.saturating_add(dispatched);
            debug!(tick = report.ticks, dispatched, "Dispatched batch");
        }
    }

    fn dispatch_batch(&mut self) -> u64 {
        let targets = self.plan.targets();
        let timeout = self.plan.request_timeout();
        let mut dispatched: u64 = 0;

        for _ in 0..self.plan.fan_out().get() {
            let index = self.picker.pick(targets.len());
            let Some(url) = targets.get(index) else {
                debug!(index, "Picker returned an out-of-range target index");
                continue;
            };
            spawn_request(
                Arc::clone(&self.client),
                Arc::clone(&self.log),
                url.clone(),
                timeout,
            );
            dispatched = dispatched.saturating_add(1);
        }

        dispatched
    }
}

/// Handle to a started run.
#[derive(Debug)]
pub struct RunHandle {
    task: JoinHandle<RunReport>,
}

impl RunHandle {
    /// Waits until the tick loop observes its deadline. Does not wait for
    /// requests that are still in flight.
    ///
    /// # Errors
    ///
    /// Returns an error when the timer task panicked or was cancelled.
    pub async fn completed(self) -> AppResult<RunReport> {
        Ok(self.task.await?)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
