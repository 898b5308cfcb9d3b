//! Configuration reading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid integer: {0:?}")]
    InvalidInteger(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
