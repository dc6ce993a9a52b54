//! The matching engines and the corpus scanner built on top of them.

pub mod corpus;
pub mod matcher;
pub mod pattern;
pub mod synonyms;
pub mod terms;

pub use corpus::{scan, Query};
pub use matcher::compatible;
pub use pattern::find_occurrences;
pub use synonyms::SynonymTable;
pub use terms::{find_by_term, find_with_synonyms, TermCategory};
