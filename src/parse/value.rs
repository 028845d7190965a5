use super::COMMENT;

const QUOTE: char = '"';

/// Clean up the text after `=`: strip a trailing comment outside the quoted
/// span, trim, then unwrap one pair of surrounding quotes.
pub(crate) fn clean_value(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let value = match comment_search_start(raw) {
        Some(start) => match raw[start..].find(COMMENT) {
            Some(offset) => &raw[..start + offset],
            None => raw,
        },
        None => raw,
    };

    unquote(value.trim()).to_string()
}

/// Byte offset from which a comment marker may start, or `None` when the
/// value opens a quote that is never closed.
fn comment_search_start(raw: &str) -> Option<usize> {
    if !raw.starts_with(QUOTE) {
        return Some(0);
    }
    raw[1..].find(QUOTE).map(|pos| pos + 1)
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with(QUOTE) && value.ends_with(QUOTE) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
