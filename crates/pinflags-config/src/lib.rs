//! Device configuration parsing for pinflags.
//!
//! This crate handles:
//! - Reading the INI dialect of `device_config.ini`
//! - Extracting and validating device sections
//! - Reporting skipped content as structured diagnostics

pub mod devices;
pub mod diagnostic;
pub mod error;
pub mod ini;

pub use devices::{ParseOutcome, load, parse};
pub use diagnostic::{Diagnostic, SectionProblem};
pub use error::{ConfigError, ConfigResult};
