//! All error types for the locsync crate.
//!
//! These are returned from all fallible operations (parsing, serialization,
//! merging, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
