use thiserror::Error;

use crate::thread::DataIntegrityError;

/// Crate-level error for the binaries and the message builder.
#[derive(Debug, Error)]
pub enum PitcherError {
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Message building error: {0}")]
    MessageBuild(#[from] lettre::error::Error),
}

impl PitcherError {
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, PitcherError::DataIntegrity(_))
    }
}
