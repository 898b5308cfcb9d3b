//! Rendering of device records into compiler definitions.

use std::fmt::Display;

use crate::device::{DeviceKind, DeviceRecord};

/// Render records into `-D` flags, preserving record order.
pub fn render(records: &[DeviceRecord]) -> Vec<String> {
    records.iter().flat_map(record_flags).collect()
}

/// Flags contributed by a single record.
pub fn record_flags(record: &DeviceRecord) -> Vec<String> {
    match record.kind {
        DeviceKind::Switch => switch_flags(record),
    }
}

// Relay pin first, then physical pin.
fn switch_flags(record: &DeviceRecord) -> Vec<String> {
    let name = format!("{}_{}", record.kind.macro_prefix(), record.id);
    vec![
        define(format_args!("{name}_RELAY_PIN_INDEX"), record.relay_pin),
        define(
            format_args!("{name}_PHYSICAL_DEVICE_PIN_INDEX"),
            record.physical_pin,
        ),
    ]
}

fn define(name: impl Display, value: impl Display) -> String {
    format!("-D{name}={value}")
}
