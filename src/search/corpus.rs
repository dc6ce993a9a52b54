//! Corpus Scanner: run one query against every document in a folder.
//!
//! Per-document work (load, search) is pure, so documents are dispatched to
//! a rayon worker pool; the indexed collect reassembles records in the
//! folder's listing order, which is also the order a sequential scan would
//! produce. A parse or I/O failure on any document aborts the whole scan;
//! the policy is the same for every document and there are no retries.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::errors::ScanError;
use crate::models::document::Document;
use crate::models::results::MatchResultRecord;
use crate::parse::load_document;
use crate::search::pattern::find_occurrences;
use crate::search::synonyms::SynonymTable;
use crate::search::terms::find_with_synonyms;

/// File name suffixes that mark a corpus document. Anything else in the
/// folder is ignored.
const CORPUS_EXTENSIONS: [&str; 2] = [".mei", ".xml"];

/// What to run against each document.
pub enum Query<'a> {
    /// An MEI snippet to locate as a contiguous pre-order subsequence.
    Pattern(&'a Document),
    /// A marking category plus literal term, expanded through `synonyms`.
    Term {
        category: &'a str,
        term: &'a str,
        synonyms: &'a SynonymTable,
    },
}

/// Scan every recognized document in `folder` and return one record per
/// document that matched at least once, in listing order. Documents with no
/// matches are omitted entirely; an empty result is valid, not an error.
pub fn scan(folder: &Path, query: &Query) -> Result<Vec<MatchResultRecord>, ScanError> {
    let files = corpus_files(folder)?;
    log::debug!(
        "scanning {} documents in {}",
        files.len(),
        folder.display()
    );

    let records: Vec<Option<MatchResultRecord>> = files
        .par_iter()
        .map(|path| scan_file(path, query))
        .collect::<Result<_, _>>()?;

    Ok(records.into_iter().flatten().collect())
}

/// Recognized documents in `folder`, in directory-listing order. The
/// listing is deliberately left unsorted.
fn corpus_files(folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
    fn listing_error(folder: &Path, source: std::io::Error) -> ScanError {
        ScanError::Folder {
            path: folder.to_path_buf(),
            source,
        }
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(|e| listing_error(folder, e))? {
        let path = entry.map_err(|e| listing_error(folder, e))?.path();
        let name = match path.file_name().and_then(OsStr::to_str) {
            Some(name) => name,
            None => continue,
        };
        if CORPUS_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            files.push(path);
        }
    }
    Ok(files)
}

fn scan_file(path: &Path, query: &Query) -> Result<Option<MatchResultRecord>, ScanError> {
    let file_name = path
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default()
        .to_string();

    let doc = load_document(path).map_err(|source| ScanError::Document {
        file: file_name.clone(),
        source,
    })?;

    let measure_numbers = match query {
        Query::Pattern(pattern) => find_occurrences(pattern, &doc),
        Query::Term {
            category,
            term,
            synonyms,
        } => find_with_synonyms(&doc, category, term, synonyms),
    };

    if measure_numbers.is_empty() {
        return Ok(None);
    }

    let appearance = measure_numbers.len();
    Ok(Some(MatchResultRecord {
        file_name,
        title: doc.title(),
        creator: doc.creators(),
        measure_numbers,
        appearance,
    }))
}
