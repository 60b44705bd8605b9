//! Document tree nodes.

/// Handle to a node owned by a [`super::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Element name and attributes, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl ElementData {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_ascii_lowercase(), attributes: Vec::new() }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Doctype(String),
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// Arena slot for a node.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    /// Parent node (`None` for the document node and detached nodes)
    pub(crate) parent: Option<NodeId>,
    /// Child nodes in document order
    pub(crate) children: Vec<NodeId>,
    /// Node payload
    pub(crate) kind: NodeKind,
}

impl NodeData {
    /// Creates a detached node.
    pub(crate) const fn new(kind: NodeKind) -> Self {
        Self { parent: None, children: Vec::new(), kind }
    }
}
