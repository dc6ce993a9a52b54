//! Persisted synonym table for term-search expansion.
//!
//! The on-disk form is one JSON object mapping a canonical term to its
//! equivalent spellings, e.g. `{"cresc.": ["crescendo", "cres."]}`. The
//! table is re-read from disk for every query; nothing is cached across
//! calls. Expansion is exactly one level deep: looking up a term yields its
//! registered synonyms and never chases entries those synonyms may have.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::SynonymError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from its JSON file.
    pub fn load(path: &Path) -> Result<Self, SynonymError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Register `synonyms` for a canonical term, replacing any previous
    /// entry.
    pub fn insert(&mut self, canonical: impl Into<String>, synonyms: Vec<String>) {
        self.entries.insert(canonical.into(), synonyms);
    }

    /// Synonyms registered for `term`, in registration order. A term with no
    /// entry yields nothing, which makes expansion a no-op.
    pub fn synonyms_of<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .get(term)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup_miss_is_empty() {
        let table = SynonymTable::new();
        assert!(table.is_empty());
        assert_eq!(table.synonyms_of("cresc.").count(), 0);

        let mut table = table;
        table.insert("cresc.", vec!["crescendo".to_string()]);
        assert!(!table.is_empty());
        assert_eq!(table.synonyms_of("dim.").count(), 0);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cresc.": ["crescendo", "cres."]}}"#).unwrap();

        let table = SynonymTable::load(file.path()).unwrap();
        let synonyms: Vec<&str> = table.synonyms_of("cresc.").collect();
        assert_eq!(synonyms, vec!["crescendo", "cres."]);
    }

    #[test]
    fn test_load_rejects_malformed_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        assert!(matches!(
            SynonymTable::load(file.path()),
            Err(SynonymError::Malformed(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            SynonymTable::load(Path::new("/no/such/terms.json")),
            Err(SynonymError::Io(_))
        ));
    }
}
