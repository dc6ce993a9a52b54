//! Sliding-window pattern search over flattened documents.

use crate::models::document::Document;
use crate::search::matcher::compatible;

/// Find every occurrence of `query` inside `target` and report the measure
/// number of each occurrence's anchor element, in increasing offset order,
/// repeats included.
///
/// Both trees are flattened to pre-order sequences; an occurrence is a
/// window of `target` whose elements `1..q` are pairwise compatible with the
/// query's. The anchor pair at `j = 0` is never compared, it only locates
/// the reported measure. Two consequences of that loop shape are kept as
/// documented behavior: a one-element query can never match, and a window
/// butting the very end of the target is never anchored.
///
/// A target shorter than the query yields an empty list, never an error.
pub fn find_occurrences(query: &Document, target: &Document) -> Vec<String> {
    let query_seq = query.flatten();
    let target_seq = target.flatten();
    let q = query_seq.len();

    let anchors = match target_seq.len().checked_sub(q) {
        Some(n) => n,
        None => return Vec::new(),
    };

    let mut measures = Vec::new();
    for i in 0..anchors {
        // the comparison range 1..q is empty for q == 1, so single-element
        // queries record nothing
        let mut hit = q > 1;
        for j in 1..q {
            if !compatible(target_seq[i + j], query_seq[j]) {
                hit = false;
                break;
            }
        }
        if hit {
            match target_seq[i].measure_number() {
                Some(n) => measures.push(n.to_string()),
                None => log::debug!("occurrence at offset {i} has no measure ancestor, skipped"),
            }
        }
    }
    measures
}
