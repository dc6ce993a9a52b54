//! Error types for document loading and corpus scanning.
//!
//! A parse failure is fatal for the document it came from; during a corpus
//! scan it is fatal for the whole scan (one policy for every document, no
//! retries). A term missing from the synonym table is not an error at all,
//! only an unreadable or malformed table file is.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal document loading errors
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML is malformed (not well-formed)
    #[error("invalid XML: {0}")]
    InvalidXml(#[from] roxmltree::Error),

    /// The file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort a corpus scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The query snippet itself failed to parse
    #[error("invalid query snippet: {0}")]
    Query(#[source] ParseError),

    /// One of the corpus documents failed to load
    #[error("failed to load {file}: {source}")]
    Document {
        file: String,
        #[source]
        source: ParseError,
    },

    /// The corpus folder could not be listed
    #[error("cannot list corpus folder {path}: {source}")]
    Folder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The synonym table file could not be loaded
    #[error("synonym table {path}: {source}")]
    SynonymTable {
        path: PathBuf,
        #[source]
        source: SynonymError,
    },
}

/// Failures while loading the persisted synonym table
#[derive(Debug, Error)]
pub enum SynonymError {
    #[error("cannot read table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed table: {0}")]
    Malformed(#[from] serde_json::Error),
}
