//! Error types for pinflags.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown device kind: {0}")]
    UnknownDeviceKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
