use std::collections::HashMap;
use std::collections::hash_map;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::Error;
use crate::parse::{ParseError, parse_ini, parse_ini_str};
use crate::source::{ReadOptions, read_lines};

/// Fold a section or key name to the form used for storage and lookup.
///
/// Simple one-to-one uppercase mapping, independent of the process locale.
/// Characters whose uppercase form expands (`ß` to `SS`) are kept as they are.
pub fn fold_case(name: &str) -> String {
    name.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{name} must be provided")]
    InvalidArgument { name: &'static str },
}

/// Key/value pairs of one `[section]`, keyed by folded key name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: HashMap<String, String>,
}

impl Section {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Look up a key, folding it first.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&fold_case(key)).map(String::as_str)
    }

    /// Iterate over `(folded key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parsed INI contents: folded section name to [`Section`].
///
/// Built once by parsing and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    sections: HashMap<String, Section>,
}

impl Table {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Parse a sequence of raw lines. See [`parse_ini`].
    pub fn parse<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_ini(lines)
    }

    /// Read and parse an INI file.
    pub fn from_path(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self, Error> {
        let lines = read_lines(path.as_ref(), options)?;
        Ok(parse_ini(lines)?)
    }

    /// Value of `key` in `section`, or `default` when either is missing.
    ///
    /// Fails only when `section` or `key` is not supplied at all.
    pub fn lookup<'a>(
        &'a self,
        section: Option<&str>,
        key: Option<&str>,
        default: Option<&'a str>,
    ) -> Result<Option<&'a str>, LookupError> {
        let section = section.ok_or(LookupError::InvalidArgument { name: "section" })?;
        let key = key.ok_or(LookupError::InvalidArgument { name: "key" })?;
        Ok(self.get(section, key).or(default))
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    pub fn get_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key).unwrap_or(default)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&fold_case(name))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(&fold_case(name))
    }

    /// Iterate over `(folded name, section)` pairs in unspecified order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub(crate) fn insert_section(&mut self, name: String, section: Section) {
        if let hash_map::Entry::Vacant(entry) = self.sections.entry(name) {
            entry.insert(section);
        }
    }

    /// `section` must already be folded and present.
    pub(crate) fn insert_value(&mut self, section: &str, key: String, value: String) {
        if let Some(section) = self.sections.get_mut(section) {
            section.entries.insert(key, value);
        }
    }
}

impl FromStr for Table {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ini_str(s)
    }
}
