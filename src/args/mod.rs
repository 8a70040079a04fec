//! CLI argument types.
mod cli;
mod defaults;


pub use cli::LoadArgs;
pub use defaults::{
    DEFAULT_CONCURRENCY, DEFAULT_DURATION_SECS, DEFAULT_INTERVAL_MS, DEFAULT_TIMEOUT_MS,
};

pub(crate) use defaults::DEFAULT_USER_AGENT;
