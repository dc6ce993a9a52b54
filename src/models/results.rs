//! Result records handed back to the embedding shell.

use serde::{Deserialize, Serialize};

/// One corpus-scan hit: a document plus every measure the query matched in.
///
/// `measure_numbers` keeps repeats (a pattern that occurs twice in measure 4
/// lists "4" twice) and `appearance` is always its length. Documents with no
/// matches never produce a record at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResultRecord {
    /// Base name of the file, no directory components.
    pub file_name: String,
    /// All title lines joined by single spaces; `None` when the document has
    /// no title statement.
    pub title: Option<String>,
    /// All creator names joined by single spaces; `None` when the document
    /// names no creators.
    pub creator: Option<String>,
    /// Measure numbers in match order, duplicates preserved.
    pub measure_numbers: Vec<String>,
    /// Occurrence count, equal to `measure_numbers.len()`.
    pub appearance: usize,
}
