//! Advisory diagnostics produced while reading a device configuration.
//!
//! None of these abort a run. A diagnostic means something was skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Why a device section was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionProblem {
    #[error("device id {0:?} is not a non-negative integer")]
    InvalidId(String),

    #[error("missing key '{0}'")]
    MissingKey(String),

    #[error("value {value:?} for '{key}' is not an integer")]
    InvalidInteger { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error(
        "{} could not be read ({reason}); no device macros will be generated",
        path.display()
    )]
    MissingSource { path: PathBuf, reason: String },

    #[error("skipping invalid section {section}: {problem}")]
    MalformedSection {
        section: String,
        problem: SectionProblem,
    },

    #[error("line {line}: cannot parse {content:?}")]
    Syntax { line: usize, content: String },
}

impl Diagnostic {
    /// Name of the section this diagnostic is about, if any.
    pub fn section(&self) -> Option<&str> {
        match self {
            Diagnostic::MalformedSection { section, .. } => Some(section),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_section() {
        let diag = Diagnostic::MalformedSection {
            section: "Switch_1".to_string(),
            problem: SectionProblem::MissingKey("physical_pin".to_string()),
        };
        assert_eq!(
            diag.to_string(),
            "skipping invalid section Switch_1: missing key 'physical_pin'"
        );
        assert_eq!(diag.section(), Some("Switch_1"));
    }

    #[test]
    fn test_missing_source_message() {
        let diag = Diagnostic::MissingSource {
            path: PathBuf::from("device_config.ini"),
            reason: "not found".to_string(),
        };
        assert!(diag.to_string().starts_with("device_config.ini could not be read"));
        assert_eq!(diag.section(), None);
    }
}
