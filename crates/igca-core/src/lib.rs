//! Core domain records and configuration for IGCA.
//!
//! Holds the typed tables every other crate exchanges (profiles, posts,
//! search hits), the analysis brief (client + competitors), and the
//! environment-driven application config.

pub mod app_config;
pub mod brief;
pub mod config;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use brief::{load_brief, Brief};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{Post, Profile, SearchHit};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brief file {path}: {source}")]
    BriefFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brief file: {0}")]
    BriefFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
