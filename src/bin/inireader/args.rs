//! Command-line lookup against an INI file.
//!
//! Exit status:
//! - 0: value (or `--default`) printed, or `--list` succeeded
//! - 1: key not found and no default given, or any error

use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use inireader::{Error, ReadOptions, Table};
use log::debug;

/// Look up values in an INI file by section and key.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// INI file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Section containing the key (case-insensitive)
    #[arg(short, long)]
    pub section: Option<String>,

    /// Key to look up (case-insensitive)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Printed when the section or key does not exist
    #[arg(short, long)]
    pub default: Option<String>,

    /// Encoding label used when the file has no byte order mark
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,

    /// Print every section and key with its value
    #[arg(short, long, conflicts_with_all = ["section", "key", "default"])]
    pub list: bool,
}

impl Args {
    pub fn execute(&self) -> Result<Option<String>, Error> {
        let options = ReadOptions::with_encoding_label(&self.encoding)?;
        let table = Table::from_path(&self.file, &options)?;
        debug!("loaded {} section(s) from {}", table.len(), self.file.display());

        if self.list {
            return Ok(Some(list_table(&table)));
        }

        let value = table.lookup(
            self.section.as_deref(),
            self.key.as_deref(),
            self.default.as_deref(),
        )?;
        Ok(value.map(str::to_string))
    }
}

fn list_table(table: &Table) -> String {
    let mut sections: Vec<_> = table.sections().collect();
    sections.sort_unstable_by_key(|(name, _)| *name);

    let mut out = String::new();
    for (name, section) in sections {
        let _ = writeln!(out, "[{name}]");
        let mut entries: Vec<_> = section.iter().collect();
        entries.sort_unstable();
        for (key, value) in entries {
            let _ = writeln!(out, "{key}={value}");
        }
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn run() -> ExitCode {
    let args = Args::parse();

    match args.execute() {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
