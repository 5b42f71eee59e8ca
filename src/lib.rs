pub mod api;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod models;
pub mod stats;
mod tests;

pub use api::*;
pub use config::*;
pub use constants::*;
pub use dataset::*;
pub use error::Error;
pub use models::*;
pub use stats::*;

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
