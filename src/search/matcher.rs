//! Element compatibility rules for pattern matching.
//!
//! Two elements are compatible when their qualified tags agree and the
//! tag-specific attribute rule passes. Notes are deliberately lenient (an
//! attribute is only checked when both sides carry it) while rests and
//! articulations are strict (their one attribute is required on both sides).
//! A rest or artic missing its required attribute is a defined no-match,
//! never an error; the term search applies the same rule.

use crate::models::document::Node;

/// Note attributes compared pairwise, each one a don't-care when either
/// side lacks it.
const NOTE_ATTRIBUTES: [&str; 4] = ["pname", "dur", "oct", "stem.dir"];

enum MatchRule {
    Note,
    RequiredAttribute(&'static str),
    TagOnly,
}

fn rule_for(node: Node) -> MatchRule {
    if node.is_mei("note") {
        MatchRule::Note
    } else if node.is_mei("rest") {
        MatchRule::RequiredAttribute("dur")
    } else if node.is_mei("artic") {
        MatchRule::RequiredAttribute("artic")
    } else {
        MatchRule::TagOnly
    }
}

/// Decide whether two elements match under the tag-specific rules.
pub fn compatible(a: Node, b: Node) -> bool {
    if a.tag() != b.tag() {
        return false;
    }
    match rule_for(a) {
        MatchRule::Note => NOTE_ATTRIBUTES.iter().all(|attr| {
            match (a.attribute(attr), b.attribute(attr)) {
                (Some(left), Some(right)) => left == right,
                _ => true,
            }
        }),
        MatchRule::RequiredAttribute(attr) => match (a.attribute(attr), b.attribute(attr)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        },
        MatchRule::TagOnly => true,
    }
}
