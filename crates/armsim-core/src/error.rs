use thiserror::Error;

use armsim_chain::error::ChainError;

/// Top-level error type for armsim.
#[derive(Debug, Error)]
pub enum ArmsimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid frame_dt: {0} (must be > 0)")]
    InvalidFrameDt(f64),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
