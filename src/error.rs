use thiserror::Error;

use crate::parse::ParseError;
use crate::source::SourceError;
use crate::table::LookupError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
