mod error;

use std::io::ErrorKind;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::debug;

pub use error::SourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Encoding used when the file carries no byte order mark.
    pub encoding: &'static Encoding,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { encoding: UTF_8 }
    }
}

impl ReadOptions {
    /// Resolve a WHATWG encoding label such as `utf-8` or `windows-1252`.
    pub fn with_encoding_label(label: &str) -> Result<Self, SourceError> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| SourceError::UnknownEncoding(label.to_string()))?;
        Ok(Self { encoding })
    }
}

/// Read a file and split it into lines.
pub fn read_lines(path: &Path, options: &ReadOptions) -> Result<Vec<String>, SourceError> {
    let content = std::fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => SourceError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Io(err),
    })?;

    let text = decode(&content, options.encoding);
    debug!("read {} byte(s) from {}", content.len(), path.display());

    Ok(split_lines(&text).map(str::to_string).collect())
}

/// Split text into lines ending in `\r\n`, `\r` or `\n`.
///
/// A terminator at the very end does not start another line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Decode bytes, letting a byte order mark override `encoding`.
/// Malformed sequences become U+FFFD.
pub fn decode(content: &[u8], encoding: &'static Encoding) -> String {
    let (text, used, had_errors) = encoding.decode(content);
    if used != encoding {
        debug!("byte order mark selects {} over {}", used.name(), encoding.name());
    }
    if had_errors {
        debug!("replaced malformed {} sequences", used.name());
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(ReadOptions::default().encoding, UTF_8);
    }

    #[test]
    fn test_encoding_label() {
        let options = ReadOptions::with_encoding_label("latin1").unwrap();
        assert_eq!(options.encoding, encoding_rs::WINDOWS_1252);

        let err = ReadOptions::with_encoding_label("klingon").unwrap_err();
        assert!(matches!(err, SourceError::UnknownEncoding(ref label) if label == "klingon"));
    }

    #[test]
    fn test_decode_utf8_bom_removed() {
        let text = decode(b"\xEF\xBB\xBF[A]\nk=v", UTF_8);
        assert_eq!(text, "[A]\nk=v");
    }

    #[test]
    fn test_decode_utf16le_bom_overrides() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "[A]".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode(&bytes, UTF_8), "[A]");
    }

    #[test]
    fn test_decode_windows_1252() {
        assert_eq!(decode(b"k=caf\xE9", encoding_rs::WINDOWS_1252), "k=café");
    }

    #[test]
    fn test_decode_malformed_replaced() {
        assert_eq!(decode(b"k=\xFF", UTF_8), "k=\u{FFFD}");
    }

    #[test]
    fn test_split_lines_terminators() {
        let lines: Vec<&str> = split_lines("a\rb\r\nc\nd").collect();
        assert_eq!(lines, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_keeps_empty_lines() {
        let lines: Vec<&str> = split_lines("a\r\rb\n\r\nc\r\n").collect();
        assert_eq!(lines, ["a", "", "b", "", "c"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("inireader_definitely_missing.ini");
        let err = read_lines(&path, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, SourceError::ResourceNotFound { .. }));
    }
}
