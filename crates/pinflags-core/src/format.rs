//! Output format selection.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How rendered flags are joined for a consumer.
///
/// The format never changes the flags themselves, only the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum FlagFormat {
    /// One line, single spaces (CMake and shell consumers).
    #[default]
    #[display("space")]
    Space,
    /// One flag per line (PlatformIO build flag lists).
    #[display("newline")]
    Newline,
}

impl FlagFormat {
    /// Resolve a format selector. Unknown or empty selectors fall back to
    /// [`FlagFormat::Space`].
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "pio" | "platformio" | "newline" => FlagFormat::Newline,
            _ => FlagFormat::Space,
        }
    }

    /// Text placed between two flags.
    pub fn separator(&self) -> &'static str {
        match self {
            FlagFormat::Space => " ",
            FlagFormat::Newline => "\n",
        }
    }

    /// Join rendered flags with this format's separator.
    pub fn join(&self, flags: &[String]) -> String {
        flags.join(self.separator())
    }
}
