//! Error types for dataset loading.
//!
//! Query operations never fail: malformed-but-well-typed input is truncated
//! or treated as "no matches". Only loading the source can go wrong, and even
//! then the [`Catalog`](crate::catalog::Catalog) recovers by substituting an
//! empty dataset.

use std::path::PathBuf;
use thiserror::Error;

/// The tabular source could not be turned into a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not well-formed CSV.
    #[error("malformed source: {0}")]
    Csv(#[from] csv::Error),

    /// A reload was requested for a dataset that was not read from a file.
    #[error("dataset has no source path to reload from")]
    NoSource,

    /// The header row names none of the hierarchy columns.
    #[error("unrecognized header, none of the hierarchy columns found (got {found:?})")]
    UnrecognizedHeader { found: Vec<String> },
}
