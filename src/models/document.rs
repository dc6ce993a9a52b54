//! Owned MEI document tree.
//!
//! roxmltree borrows its input string, so the loader copies the element tree
//! into this arena once parsing succeeds. Only element nodes are stored; a
//! node's `text` is the character data sitting before its first child
//! element, which is the only text the search rules ever look at. Parent
//! links are arena indices, never owning references, and arena order is
//! pre-order so the sliding-window matcher can treat indices as positions.

/// The MEI namespace every element of interest lives in.
pub const MEI_NS: &str = "http://www.music-encoding.org/ns/mei";

/// Index of a node inside its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) namespace: Option<String>,
    pub(crate) name: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) text: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A single rooted tree of elements, loaded from one MEI source.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub(crate) nodes: Vec<NodeData>,
}

impl Document {
    pub(crate) fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        id
    }

    /// The root element. The loader never produces an empty arena.
    pub fn root(&self) -> Node<'_> {
        self.get(NodeId(0))
    }

    pub fn get(&self, id: NodeId) -> Node<'_> {
        Node { doc: self, id }
    }

    /// Every element in pre-order. Position in this sequence is what the
    /// pattern matcher means by "offset".
    pub fn flatten(&self) -> Vec<Node<'_>> {
        self.root().descendants().collect()
    }

    /// All MEI elements with the given local name, in document order.
    pub fn elements_by_tag<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Node<'a>> {
        self.root().descendants().filter(move |n| n.is_mei(name))
    }

    /// Non-empty values of `attr` across every MEI `tag` element.
    pub fn attribute_values<'a>(&'a self, tag: &'a str, attr: &'a str) -> Vec<&'a str> {
        self.elements_by_tag(tag)
            .filter_map(|n| n.attribute(attr))
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Title of the piece: the text of every `title` line under the first
    /// `titleStmt`, joined by single spaces. `None` when the document has no
    /// `titleStmt` at all.
    pub fn title(&self) -> Option<String> {
        let title_stmt = self.elements_by_tag("titleStmt").next()?;
        let lines: Vec<&str> = title_stmt
            .children()
            .filter(|n| n.is_mei("title"))
            .filter_map(|n| n.text())
            .collect();
        Some(lines.join(" "))
    }

    /// Creators of the piece: the text of every `respStmt` child carrying
    /// `role="creator"`, joined by single spaces. `None` when the document
    /// has no `respStmt`.
    pub fn creators(&self) -> Option<String> {
        let resp_stmt = self.elements_by_tag("respStmt").next()?;
        let names: Vec<&str> = resp_stmt
            .children()
            .filter(|n| n.attribute("role") == Some("creator"))
            .filter_map(|n| n.text())
            .collect();
        Some(names.join(" "))
    }
}

/// Copyable handle to one element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(self) -> &'a NodeData {
        &self.doc.nodes[self.id.0]
    }

    /// Namespace URI and local name.
    pub fn tag(self) -> (Option<&'a str>, &'a str) {
        let data = self.data();
        (data.namespace.as_deref(), &data.name)
    }

    /// True when this element is `name` in the MEI namespace.
    pub fn is_mei(self, name: &str) -> bool {
        let data = self.data();
        data.namespace.as_deref() == Some(MEI_NS) && data.name == name
    }

    pub fn attribute(self, name: &str) -> Option<&'a str> {
        self.data()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Character data before the first child element, if any.
    pub fn text(self) -> Option<&'a str> {
        self.data().text.as_deref()
    }

    pub fn parent(self) -> Option<Node<'a>> {
        self.data().parent.map(|id| self.doc.get(id))
    }

    pub fn children(self) -> impl Iterator<Item = Node<'a>> {
        let doc = self.doc;
        self.data().children.iter().map(move |&id| doc.get(id))
    }

    /// This node, then each parent up to the root.
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors {
            doc: self.doc,
            next: Some(self.id),
        }
    }

    /// This node and its whole subtree, pre-order.
    pub fn descendants(self) -> Descendants<'a> {
        Descendants {
            doc: self.doc,
            stack: vec![self.id],
        }
    }

    /// Measure number of this element: the `n` attribute of the nearest
    /// ancestor-or-self tagged `measure`. `None` when no such ancestor
    /// exists, or when the measure carries no `n`.
    pub fn measure_number(self) -> Option<&'a str> {
        self.ancestors()
            .find(|n| n.is_mei("measure"))
            .and_then(|m| m.attribute("n"))
    }
}

pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        let id = self.next?;
        self.next = self.doc.nodes[id.0].parent;
        Some(self.doc.get(id))
    }
}

pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        let id = self.stack.pop()?;
        let node = self.doc.get(id);
        // push in reverse so children pop in document order
        self.stack
            .extend(self.doc.nodes[id.0].children.iter().rev().copied());
        Some(node)
    }
}
