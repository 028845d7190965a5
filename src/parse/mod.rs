//! Single-pass INI line parser.
//!
//! Each line is classified on its own, in order:
//! 1. Blank or `;` comment: skipped
//! 2. `[name]`: opens (or reopens) a section
//! 3. `key=value`: stored in the current section, last occurrence wins
//!
//! Anything else, or a key/value pair before the first section header, is a
//! [`ParseError::MalformedLine`].

mod error;
mod value;

use log::{debug, trace};

pub use error::ParseError;

use crate::source::split_lines;
use crate::table::{Section, Table, fold_case};
use value::clean_value;

const COMMENT: char = ';';
const SEPARATOR: char = '=';

/// Parse an already-split sequence of lines into a [`Table`].
pub fn parse_ini<I, S>(lines: I) -> Result<Table, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = Table::new();
    let mut current_section: Option<String> = None;

    for (index, raw_line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let line = raw_line.as_ref().trim();

        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }

        if let Some(name) = section_name(line) {
            let name = fold_case(name);
            if table.contains_section(&name) {
                debug!("reopening section [{name}] at line {line_no}");
            } else {
                debug!("opening section [{name}] at line {line_no}");
                table.insert_section(name.clone(), Section::new());
            }
            current_section = Some(name);
            continue;
        }

        let (Some((raw_key, raw_value)), Some(section)) =
            (line.split_once(SEPARATOR), current_section.as_deref())
        else {
            return Err(ParseError::MalformedLine {
                line: line_no,
                text: line.to_string(),
            });
        };

        let key = fold_case(raw_key).trim().to_string();
        let value = clean_value(raw_value);
        trace!("[{section}] {key} = {value:?}");
        table.insert_value(section, key, value);
    }

    debug!("parsed {} section(s)", table.len());
    Ok(table)
}

/// Parse INI text, splitting it into lines first.
pub fn parse_ini_str(text: &str) -> Result<Table, ParseError> {
    parse_ini(split_lines(text))
}

fn section_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}
