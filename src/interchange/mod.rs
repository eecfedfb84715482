//! Bulk interchange codecs
//!
//! CSV and JSON renditions of a record table. Encoding writes complete
//! records, ids included; decoding never reads ids, so imported rows are
//! always assigned fresh ones. Decoding is tolerant per row: a bad entry
//! becomes an `Err` slot in the result, and only a document that cannot
//! be read at all fails the whole decode.

pub mod csv;
pub mod json;

use clap::ValueEnum;

/// Interchange document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Delimited rows with a header line
    Csv,
    /// Array of field-keyed objects
    Json,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Json => write!(f, "json"),
        }
    }
}
