//! ReChord search core
//!
//! Locates occurrences of a musical pattern, or of a named marking, inside a
//! corpus of MEI notation documents and reports which measures of which
//! documents contain them. The embedding shell (web UI, upload handling)
//! hands in a corpus folder and a parsed query and gets back
//! [`MatchResultRecord`]s; nothing in here knows about HTTP or uploads.
//!
//! No logger is installed here; the crate logs through the `log` facade and
//! the embedding shell picks an implementation.

pub mod errors;
pub mod models;
pub mod parse;
pub mod search;

use std::path::Path;

pub use errors::{ParseError, ScanError, SynonymError};
pub use models::document::{Document, Node, NodeId, MEI_NS};
pub use models::results::MatchResultRecord;
pub use parse::{load_document, parse_document};
pub use search::corpus::{scan, Query};
pub use search::matcher::compatible;
pub use search::pattern::find_occurrences;
pub use search::synonyms::SynonymTable;
pub use search::terms::{find_by_term, find_with_synonyms, TermCategory};

/// Parse `query_source` as an MEI snippet and scan every document under
/// `corpus` for it. One record per matching document, in listing order.
pub fn search_by_pattern(
    corpus: &Path,
    query_source: &str,
) -> Result<Vec<MatchResultRecord>, ScanError> {
    let query = parse_document(query_source).map_err(ScanError::Query)?;
    scan(corpus, &Query::Pattern(&query))
}

/// Scan every document under `corpus` for a marking of `category` reading
/// `term`, expanded through the synonym table at `synonyms_path`. The table
/// file is re-read on every call; nothing is cached between queries.
pub fn search_by_term(
    corpus: &Path,
    category: &str,
    term: &str,
    synonyms_path: &Path,
) -> Result<Vec<MatchResultRecord>, ScanError> {
    let synonyms =
        SynonymTable::load(synonyms_path).map_err(|source| ScanError::SynonymTable {
            path: synonyms_path.to_path_buf(),
            source,
        })?;
    scan(
        corpus,
        &Query::Term {
            category,
            term,
            synonyms: &synonyms,
        },
    )
}
