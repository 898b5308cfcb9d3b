//! Core domain types and flag rendering for pinflags.
//!
//! This crate contains:
//! - Device kinds and validated device records
//! - Output format selection
//! - Rendering of records into `-D` compiler definitions

pub mod device;
pub mod error;
pub mod format;
pub mod render;

pub use device::{DeviceKind, DeviceRecord};
pub use error::{Error, Result};
pub use format::FlagFormat;
pub use render::render;
