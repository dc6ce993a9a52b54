//! Document Loader: MEI markup in, owned arena tree out.
//!
//! Parsing goes through roxmltree and then copies the element tree into a
//! [`Document`] arena, so callers never deal with the borrowed lifetimes of
//! the underlying parser. Loading is pure and uncached; every call re-parses.

use std::fs;
use std::path::Path;

use crate::errors::ParseError;
use crate::models::document::{Document, NodeData, NodeId};

/// Parse an MEI string into a [`Document`].
///
/// Fails with [`ParseError::InvalidXml`] when the source is not well-formed.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let parsed = roxmltree::Document::parse(source)?;
    let mut doc = Document::default();
    copy_element(&mut doc, parsed.root_element(), None);
    Ok(doc)
}

/// Read and parse one MEI file. The handle is scoped to the read and is
/// released before parsing starts, on every exit path.
pub fn load_document(path: &Path) -> Result<Document, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text)
}

fn copy_element(doc: &mut Document, source: roxmltree::Node, parent: Option<NodeId>) -> NodeId {
    let id = doc.push(NodeData {
        namespace: source.tag_name().namespace().map(str::to_string),
        name: source.tag_name().name().to_string(),
        attributes: source
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect(),
        text: source.text().map(str::to_string),
        parent,
        children: Vec::new(),
    });
    for child in source.children().filter(|c| c.is_element()) {
        let child_id = copy_element(doc, child, Some(id));
        doc.nodes[id.0].children.push(child_id);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::MEI_NS;

    #[test]
    fn test_parse_simple_document() {
        let doc = parse_document(
            r#"<mei xmlns="http://www.music-encoding.org/ns/mei">
                 <music><measure n="3"><note pname="c" dur="4"/></measure></music>
               </mei>"#,
        )
        .unwrap();

        let root = doc.root();
        assert_eq!(root.tag(), (Some(MEI_NS), "mei"));

        let note = doc.elements_by_tag("note").next().unwrap();
        assert_eq!(note.attribute("pname"), Some("c"));
        assert_eq!(note.attribute("dur"), Some("4"));
        assert_eq!(note.attribute("oct"), None);
        assert_eq!(note.parent().unwrap().tag().1, "measure");
    }

    #[test]
    fn test_parse_keeps_leading_text() {
        let doc = parse_document(
            r#"<mei xmlns="http://www.music-encoding.org/ns/mei">
                 <music><measure n="1"><tempo>Allegro</tempo></measure></music>
               </mei>"#,
        )
        .unwrap();
        let tempo = doc.elements_by_tag("tempo").next().unwrap();
        assert_eq!(tempo.text(), Some("Allegro"));
    }

    #[test]
    fn test_parse_rejects_malformed_markup() {
        let err = parse_document("<mei><unclosed></mei>").unwrap_err();
        assert!(matches!(err, ParseError::InvalidXml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_document(Path::new("/no/such/file.mei")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
