use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("could not parse line {line}: \"{text}\"")]
    MalformedLine { line: usize, text: String },
}
