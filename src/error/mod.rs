mod app;
mod config;
mod request;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use request::RequestError;
pub use validation::ValidationError;
