//! Device configuration parsing.

use pinflags_core::{DeviceKind, DeviceRecord};
use std::path::Path;

use crate::diagnostic::{Diagnostic, SectionProblem};
use crate::ini::{DEFAULT_SECTION, IniDocument, Section, SyntaxProblem, parse_int};
use crate::{ConfigError, ConfigResult};

/// Records read from a configuration, with everything that was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Valid records, ascending by id.
    pub records: Vec<DeviceRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// True when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Render the records into compiler flags.
    pub fn flags(&self) -> Vec<String> {
        pinflags_core::render(&self.records)
    }
}

/// Parse a device configuration from text.
pub fn parse(source: &str) -> ParseOutcome {
    let doc = IniDocument::parse(source);

    let mut diagnostics: Vec<Diagnostic> = doc
        .problems()
        .iter()
        .filter(|p| concerns_devices(p))
        .map(|p| Diagnostic::Syntax {
            line: p.line,
            content: p.content.clone(),
        })
        .collect();
    let mut records = Vec::new();

    for section in doc.sections() {
        // Sections of unmodeled families are not our concern.
        let Some((kind, suffix)) = DeviceKind::from_section_name(&section.name) else {
            continue;
        };

        match parse_device(&doc, section, kind, suffix) {
            Ok(record) => records.push(record),
            Err(problem) => diagnostics.push(Diagnostic::MalformedSection {
                section: section.name.clone(),
                problem,
            }),
        }
    }

    // Stable, so duplicate ids keep file order.
    records.sort_by_key(|r| r.id);

    ParseOutcome {
        records,
        diagnostics,
    }
}

// Lines inside sections of unmodeled families are as silent as the sections.
fn concerns_devices(problem: &SyntaxProblem) -> bool {
    problem.section.as_deref().is_none_or(|name| {
        name == DEFAULT_SECTION || DeviceKind::from_section_name(name).is_some()
    })
}

/// Read and parse a device configuration file.
///
/// An unreadable file yields no records and a single
/// [`Diagnostic::MissingSource`].
pub fn load(path: impl AsRef<Path>) -> ParseOutcome {
    let path = path.as_ref();
    match read_source(path) {
        Ok(source) => parse(&source),
        Err(e) => {
            let reason = match &e {
                ConfigError::Read { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            ParseOutcome {
                records: Vec::new(),
                diagnostics: vec![Diagnostic::MissingSource {
                    path: path.to_path_buf(),
                    reason,
                }],
            }
        }
    }
}

fn read_source(path: &Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_device(
    doc: &IniDocument,
    section: &Section,
    kind: DeviceKind,
    suffix: &str,
) -> Result<DeviceRecord, SectionProblem> {
    let id = parse_int(suffix)
        .ok()
        .and_then(|id| u32::try_from(id).ok())
        .ok_or_else(|| SectionProblem::InvalidId(suffix.to_string()))?;

    match kind {
        DeviceKind::Switch => Ok(DeviceRecord::switch(
            id,
            int_option(doc, section, "relay_pin")?,
            int_option(doc, section, "physical_pin")?,
        )),
    }
}

fn int_option(doc: &IniDocument, section: &Section, key: &str) -> Result<i64, SectionProblem> {
    let value = doc
        .get(section, key)
        .ok_or_else(|| SectionProblem::MissingKey(key.to_string()))?;
    parse_int(value).map_err(|_| SectionProblem::InvalidInteger {
        key: key.to_string(),
        value: value.to_string(),
    })
}
