//! Fixed-interval load generation against a pool of targets.
//!
//! A [`LoadDriver`] validates its [`LoadTestConfig`] once, then [`LoadDriver::run`]
//! starts a timer task that fires every tick interval and spawns a batch of
//! independent GET requests until the configured duration has elapsed.
mod config;
mod dispatch;
mod picker;
mod runner;


pub use config::{LoadPlan, LoadTestConfig};
pub use picker::{RandomPicker, TargetPicker};
pub use runner::{LoadDriver, RunHandle, RunReport};
