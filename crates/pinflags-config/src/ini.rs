//! Section/key text reader.
//!
//! Reads the INI dialect device configurations are written in:
//! - `[name]` section headers
//! - `key = value` or `key: value` options, keys case-insensitive
//! - `#` and `;` full-line comments
//! - indented continuation lines extending the previous value; blank lines
//!   inside a value are kept, a comment line ends it
//! - a `[DEFAULT]` section whose options every other section inherits
//!
//! Malformed lines never abort reading; they are collected as
//! [`SyntaxProblem`]s and skipped.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{ConfigError, ConfigResult};

/// Name of the section providing fallback values.
pub const DEFAULT_SECTION: &str = "DEFAULT";

static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<name>.+)\]").unwrap());

static OPTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<key>[^=:]*?)\s*[=:]\s*(?P<value>.*)$").unwrap());

/// A named group of options.
#[derive(Debug, Clone, Default)]
pub struct Section {
    pub name: String,
    options: HashMap<String, String>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: HashMap::new(),
        }
    }

    /// Value set directly in this section, ignoring defaults.
    pub fn own(&self, key: &str) -> Option<&str> {
        self.options
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// A line that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxProblem {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    /// Section the line appeared in; `None` before the first header.
    pub section: Option<String>,
}

/// A parsed document.
#[derive(Debug, Clone, Default)]
pub struct IniDocument {
    defaults: Section,
    sections: Vec<Section>,
    problems: Vec<SyntaxProblem>,
}

enum Cursor {
    None,
    Defaults,
    Section(usize),
}

impl IniDocument {
    /// Read a document from text. Never fails.
    pub fn parse(source: &str) -> Self {
        let mut doc = IniDocument {
            defaults: Section::new(DEFAULT_SECTION),
            ..Default::default()
        };
        let mut cursor = Cursor::None;
        // Key and indentation of the last option, for continuation lines.
        let mut last_option: Option<(String, usize)> = None;
        let mut blank_lines = 0;

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                if last_option.is_some() {
                    blank_lines += 1;
                }
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                last_option = None;
                continue;
            }

            let indent = raw.len() - raw.trim_start().len();
            if let Some((key, key_indent)) = &last_option {
                if indent > *key_indent {
                    if let Some(value) = doc.current_mut(&cursor).options.get_mut(key) {
                        for _ in 0..=blank_lines {
                            value.push('\n');
                        }
                        value.push_str(trimmed);
                    }
                    blank_lines = 0;
                    continue;
                }
            }
            blank_lines = 0;

            if let Some(caps) = SECTION_REGEX.captures(trimmed) {
                let name = &caps["name"];
                if name == DEFAULT_SECTION {
                    cursor = Cursor::Defaults;
                } else {
                    doc.sections.push(Section::new(name));
                    cursor = Cursor::Section(doc.sections.len() - 1);
                }
                last_option = None;
                continue;
            }

            let option = OPTION_REGEX
                .captures(trimmed)
                .filter(|caps| !caps["key"].is_empty());
            match (option, &cursor) {
                (Some(caps), Cursor::Defaults | Cursor::Section(_)) => {
                    let key = caps["key"].to_ascii_lowercase();
                    let value = caps["value"].trim().to_string();
                    doc.current_mut(&cursor).options.insert(key.clone(), value);
                    last_option = Some((key, indent));
                }
                _ => {
                    let section = match &cursor {
                        Cursor::None => None,
                        Cursor::Defaults => Some(DEFAULT_SECTION.to_string()),
                        Cursor::Section(index) => Some(doc.sections[*index].name.clone()),
                    };
                    doc.problems.push(SyntaxProblem {
                        line,
                        content: trimmed.to_string(),
                        section,
                    });
                    last_option = None;
                }
            }
        }

        doc
    }

    fn current_mut(&mut self, cursor: &Cursor) -> &mut Section {
        match cursor {
            Cursor::Section(index) => &mut self.sections[*index],
            Cursor::Defaults | Cursor::None => &mut self.defaults,
        }
    }

    /// Sections in file order, excluding `[DEFAULT]`.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Lines that were skipped as unreadable.
    pub fn problems(&self) -> &[SyntaxProblem] {
        &self.problems
    }

    /// Look up a key in a section, falling back to `[DEFAULT]`.
    pub fn get<'a>(&'a self, section: &'a Section, key: &str) -> Option<&'a str> {
        section.own(key).or_else(|| self.defaults.own(key))
    }
}

/// Parse an integer value.
///
/// Accepts surrounding whitespace, one leading sign and `_` between digits.
pub fn parse_int(value: &str) -> ConfigResult<i64> {
    let invalid = || ConfigError::InvalidInteger(value.to_string());
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return Err(invalid());
    }

    let mut cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if negative {
        cleaned.insert(0, '-');
    }
    cleaned.parse::<i64>().map_err(|_| invalid())
}
