pub mod error;
pub mod parse;
pub mod source;
pub mod table;

pub use error::Error;
pub use parse::{ParseError, parse_ini, parse_ini_str};
pub use source::{ReadOptions, SourceError, read_lines, split_lines};
pub use table::{LookupError, Section, Table, fold_case};
