//! Configuration - tunable simulation constants, loadable from TOML

mod constants;

pub use constants::SimConstants;

use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read constants file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid constants: {0}")]
    Validation(String),
}
