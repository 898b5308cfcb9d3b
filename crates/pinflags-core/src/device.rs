//! Device kinds and validated device records.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// The family a configured device belongs to.
///
/// Each kind owns the section prefix it is configured under and the macro
/// prefix its definitions are rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// A relay-driven switch with a physical input pin.
    #[display("Switch")]
    Switch,
}

impl DeviceKind {
    /// Every kind the parser recognizes.
    pub const ALL: &'static [DeviceKind] = &[DeviceKind::Switch];

    /// Prefix of configuration section names describing this kind.
    pub fn section_prefix(&self) -> &'static str {
        match self {
            DeviceKind::Switch => "Switch_",
        }
    }

    /// Prefix of the preprocessor macros rendered for this kind.
    pub fn macro_prefix(&self) -> &'static str {
        match self {
            DeviceKind::Switch => "SWITCH",
        }
    }

    /// Match a section name against the known prefixes.
    ///
    /// Returns the kind and the remaining id suffix, or `None` for sections
    /// that belong to no modeled family.
    pub fn from_section_name(name: &str) -> Option<(DeviceKind, &str)> {
        Self::ALL.iter().find_map(|kind| {
            name.strip_prefix(kind.section_prefix())
                .map(|suffix| (*kind, suffix))
        })
    }
}

impl FromStr for DeviceKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "switch" => Ok(DeviceKind::Switch),
            _ => Err(Error::UnknownDeviceKind(s.to_string())),
        }
    }
}

/// A fully validated device read from the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Device family.
    pub kind: DeviceKind,
    /// Numeric id taken from the section name (`Switch_<id>`).
    pub id: u32,
    /// Logical relay index.
    pub relay_pin: i64,
    /// Physical pin index.
    pub physical_pin: i64,
}

impl DeviceRecord {
    /// Create a switch record.
    pub fn switch(id: u32, relay_pin: i64, physical_pin: i64) -> Self {
        Self {
            kind: DeviceKind::Switch,
            id,
            relay_pin,
            physical_pin,
        }
    }
}
