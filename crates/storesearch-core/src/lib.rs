pub mod app_config;
pub mod config;
pub mod stores;

pub use app_config::AppConfig;
pub use config::build_app_config;
pub use stores::{AvailableTime, StoreRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
