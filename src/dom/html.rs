//! HTML bridge: builds a [`Document`] from markup and writes it back.

use std::collections::HashMap;

use scraper::Html;

use super::node::NodeKind;
use super::{
    Document,
    NodeId,
};

/// Elements without closing tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text is written verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Document {
    /// Parses a full HTML page.
    ///
    /// Parsing is lenient: malformed markup is repaired the way a browser
    /// would, so there is no error path. `<head>` and `<body>` always exist
    /// in the result.
    #[must_use]
    pub fn parse_html(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        let mut doc = Self::empty();

        // scraper のノード ID → こちらのノード ID（親は必ず子より先に現れる）
        let source_root = html.tree.root();
        let mut mapping = HashMap::new();
        mapping.insert(source_root.id(), doc.root());
        for node in source_root.descendants().skip(1) {
            let Some(parent) = node.parent().and_then(|p| mapping.get(&p.id()).copied()) else {
                continue;
            };
            let id = match node.value() {
                scraper::Node::Doctype(doctype) => doc.create_doctype(doctype.name()),
                scraper::Node::Comment(comment) => doc.create_comment(comment),
                scraper::Node::Text(text) => doc.create_text(text),
                scraper::Node::Element(element) => {
                    let id = doc.create_element(element.name());
                    for (name, value) in element.attrs() {
                        doc.set_attribute(id, name, value);
                    }
                    id
                }
                scraper::Node::Document
                | scraper::Node::Fragment
                | scraper::Node::ProcessingInstruction(_) => continue,
            };
            doc.append_child(parent, id);
            mapping.insert(node.id(), id);
        }
        if doc.body().is_none() {
            tracing::debug!("Parsed markup has no <body>; wrapping in an empty document");
            return Self::new();
        }
        doc
    }

    /// Serializes the document back to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in self.children(self.root()) {
            self.write_node(&mut out, *child, false);
        }
        out
    }

    /// Serializes the children of `id` (`innerHTML` equivalent).
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        let raw = self.tag_name(id).is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));
        let mut out = String::new();
        for child in self.children(id) {
            self.write_node(&mut out, *child, raw);
        }
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, raw_text: bool) {
        match self.kind(id) {
            Some(NodeKind::Doctype(name)) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(name);
                out.push('>');
            }
            Some(NodeKind::Text(text)) if raw_text => out.push_str(text),
            Some(NodeKind::Text(text)) => out.push_str(&escape_text(text)),
            Some(NodeKind::Comment(text)) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            Some(NodeKind::Element(element)) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                    return;
                }
                out.push_str(&self.inner_html(id));
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
            Some(NodeKind::Document) | None => {}
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
