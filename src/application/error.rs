//! Application-level errors (catalog import and configuration)

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bringing the catalog into memory.
///
/// The domain layer itself has no error type: once a catalog exists, its
/// operations are total. Everything that can actually fail lives at this
/// boundary.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("cannot read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog row {row}: {source}")]
    MalformedRow {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("invalid price in catalog row {row}: {value:?}")]
    InvalidPrice { row: usize, value: String },

    #[error("invalid quantity in catalog row {row}: {value:?}")]
    InvalidQuantity { row: usize, value: String },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
