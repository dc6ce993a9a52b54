//! Data model for the search core.

pub mod document;
pub mod results;

pub use document::{Document, Node, NodeId, MEI_NS};
pub use results::MatchResultRecord;
