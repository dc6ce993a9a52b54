//! Category-keyword search for named markings.
//!
//! Each category maps to one MEI tag and a rule saying whether the term is
//! matched against the element's text or against one of its attributes. The
//! scan stays inside the document's `music` subtree; header material is
//! never searched. A node missing the attribute its category matches on
//! contributes nothing, the same no-match rule the element matcher uses.

use crate::models::document::{Document, Node};
use crate::search::synonyms::SynonymTable;

/// The marking categories the search understands. Labels are the literal
/// strings the embedding shell submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermCategory {
    ExpressiveTerms,
    Articulation,
    DynamicMarkings,
    TempoMarking,
    PedalMarking,
    /// Recognized but not searchable yet; always yields nothing.
    Hairpin,
    /// Recognized but not searchable yet; always yields nothing.
    PianoFingerings,
}

enum MatchMode {
    Text,
    Attribute(&'static str),
}

struct CategoryRule {
    tag: &'static str,
    mode: MatchMode,
}

impl TermCategory {
    pub fn parse(label: &str) -> Option<TermCategory> {
        match label {
            "Expressive Terms" => Some(TermCategory::ExpressiveTerms),
            "Articulation" => Some(TermCategory::Articulation),
            "Dynamic Markings" => Some(TermCategory::DynamicMarkings),
            "Tempo Marking" => Some(TermCategory::TempoMarking),
            "Pedal Marking" => Some(TermCategory::PedalMarking),
            "Hairpin" => Some(TermCategory::Hairpin),
            "Piano Fingerings" => Some(TermCategory::PianoFingerings),
            _ => None,
        }
    }

    fn rule(self) -> Option<CategoryRule> {
        let rule = |tag, mode| Some(CategoryRule { tag, mode });
        match self {
            TermCategory::ExpressiveTerms => rule("dir", MatchMode::Text),
            TermCategory::Articulation => rule("artic", MatchMode::Attribute("artic")),
            TermCategory::DynamicMarkings => rule("dynam", MatchMode::Text),
            TermCategory::TempoMarking => rule("tempo", MatchMode::Text),
            TermCategory::PedalMarking => rule("pedal", MatchMode::Attribute("dir")),
            TermCategory::Hairpin | TermCategory::PianoFingerings => None,
        }
    }
}

/// Measure numbers of every marking in `doc`'s music subtree whose category
/// and literal term match, in document order. Unknown categories and the
/// not-yet-searchable ones yield an empty list.
pub fn find_by_term(doc: &Document, category: &str, term: &str) -> Vec<String> {
    let rule = match TermCategory::parse(category).and_then(TermCategory::rule) {
        Some(rule) => rule,
        None => return Vec::new(),
    };
    let music = match doc.root().descendants().find(|n| n.is_mei("music")) {
        Some(music) => music,
        None => return Vec::new(),
    };

    music
        .descendants()
        .filter(|n| n.is_mei(rule.tag))
        .filter(|n| matches_term(*n, &rule.mode, term))
        .filter_map(|n| n.measure_number().map(str::to_string))
        .collect()
}

fn matches_term(node: Node, mode: &MatchMode, term: &str) -> bool {
    match mode {
        MatchMode::Text => node.text() == Some(term),
        MatchMode::Attribute(attr) => node.attribute(attr) == Some(term),
    }
}

/// [`find_by_term`] followed by one round of synonym expansion: for each
/// synonym registered for `term`, the category search runs again and its
/// measures are appended after the primary results. No deduplication, no
/// transitive lookups.
pub fn find_with_synonyms(
    doc: &Document,
    category: &str,
    term: &str,
    synonyms: &SynonymTable,
) -> Vec<String> {
    let mut measures = find_by_term(doc, category, term);
    for synonym in synonyms.synonyms_of(term) {
        measures.extend(find_by_term(doc, category, synonym));
    }
    measures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_document;

    const SCORE: &str = r#"<?xml version="1.0"?>
<mei xmlns="http://www.music-encoding.org/ns/mei">
  <meiHead>
    <titleStmt><title>Allegro</title></titleStmt>
  </meiHead>
  <music>
    <body>
      <measure n="1">
        <tempo>Allegro</tempo>
        <dir>cresc.</dir>
        <note pname="c" dur="4"><artic artic="stacc"/></note>
      </measure>
      <measure n="3">
        <dir>crescendo</dir>
        <dynam>pp</dynam>
        <pedal dir="down"/>
      </measure>
      <measure n="45">
        <tempo>Allegro</tempo>
        <artic artic="ten"/>
      </measure>
    </body>
  </music>
</mei>"#;

    #[test]
    fn test_tempo_marking_in_document_order() {
        let doc = parse_document(SCORE).unwrap();
        assert_eq!(
            find_by_term(&doc, "Tempo Marking", "Allegro"),
            vec!["1", "45"]
        );
    }

    #[test]
    fn test_header_material_is_not_searched() {
        // the title also reads "Allegro" but sits outside the music subtree
        let doc = parse_document(SCORE).unwrap();
        assert_eq!(find_by_term(&doc, "Tempo Marking", "Allegro").len(), 2);
    }

    #[test]
    fn test_articulation_matches_attribute() {
        let doc = parse_document(SCORE).unwrap();
        assert_eq!(find_by_term(&doc, "Articulation", "stacc"), vec!["1"]);
        assert_eq!(find_by_term(&doc, "Articulation", "ten"), vec!["45"]);
    }

    #[test]
    fn test_pedal_marking_matches_dir_attribute() {
        let doc = parse_document(SCORE).unwrap();
        assert_eq!(find_by_term(&doc, "Pedal Marking", "down"), vec!["3"]);
    }

    #[test]
    fn test_dynamic_markings_match_text() {
        let doc = parse_document(SCORE).unwrap();
        assert_eq!(find_by_term(&doc, "Dynamic Markings", "pp"), vec!["3"]);
    }

    #[test]
    fn test_unsearchable_categories_are_empty() {
        let doc = parse_document(SCORE).unwrap();
        assert!(find_by_term(&doc, "Hairpin", "anything").is_empty());
        assert!(find_by_term(&doc, "Piano Fingerings", "1").is_empty());
        assert!(find_by_term(&doc, "No Such Category", "pp").is_empty());
    }

    #[test]
    fn test_document_without_music_subtree_is_empty() {
        let doc = parse_document(
            r#"<mei xmlns="http://www.music-encoding.org/ns/mei"><meiHead/></mei>"#,
        )
        .unwrap();
        assert!(find_by_term(&doc, "Tempo Marking", "Allegro").is_empty());
    }

    #[test]
    fn test_synonym_expansion_concatenates_primary_first() {
        let doc = parse_document(SCORE).unwrap();
        let mut table = SynonymTable::new();
        table.insert("cresc.", vec!["crescendo".to_string()]);

        // "cresc." hits measure 1, its synonym hits measure 3
        assert_eq!(
            find_with_synonyms(&doc, "Expressive Terms", "cresc.", &table),
            vec!["1", "3"]
        );
        // searching the synonym directly does not expand backwards
        assert_eq!(
            find_with_synonyms(&doc, "Expressive Terms", "crescendo", &table),
            vec!["3"]
        );
    }

    #[test]
    fn test_synonym_expansion_is_one_level_only() {
        let doc = parse_document(SCORE).unwrap();
        let mut table = SynonymTable::new();
        table.insert("rinf.", vec!["cresc.".to_string()]);
        table.insert("cresc.", vec!["crescendo".to_string()]);

        // "rinf." expands to "cresc." but never on to "crescendo"
        assert_eq!(
            find_with_synonyms(&doc, "Expressive Terms", "rinf.", &table),
            vec!["1"]
        );
    }

    #[test]
    fn test_unregistered_term_expansion_is_noop() {
        let doc = parse_document(SCORE).unwrap();
        let table = SynonymTable::new();
        assert_eq!(
            find_with_synonyms(&doc, "Expressive Terms", "cresc.", &table),
            vec!["1"]
        );
    }
}
