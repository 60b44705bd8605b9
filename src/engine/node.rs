//! Best-effort translation of elements without an explicit key.

use crate::dom::{
    Document,
    NodeId,
    repad,
};
use crate::engine::token::rewrite_tokens;
use crate::ir::Catalog;
use crate::types::LanguageCode;

/// Elements whose text is never translated.
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// Descendant text nodes of `element` outside `script` / `style`.
pub(crate) fn translatable_text_nodes(doc: &Document, element: NodeId) -> Vec<NodeId> {
    doc.text_nodes(element).into_iter().filter(|text| !inside_raw_text(doc, *text, element)).collect()
}

/// Whether `node` sits under a `script` / `style` element within `scope`.
fn inside_raw_text(doc: &Document, node: NodeId, scope: NodeId) -> bool {
    let mut current = doc.parent(node);
    while let Some(ancestor) = current {
        if doc.tag_name(ancestor).is_some_and(|tag| RAW_TEXT_TAGS.contains(&tag)) {
            return true;
        }
        if ancestor == scope {
            return false;
        }
        current = doc.parent(ancestor);
    }
    false
}

/// Translates `element` by exact phrase match, falling back to token rules.
///
/// On a phrase match only the text nodes carrying that phrase are rewritten,
/// so icon children stay in place. Returns whether anything changed.
pub fn translate_node(
    doc: &mut Document,
    catalog: &Catalog,
    element: NodeId,
    target: LanguageCode,
) -> bool {
    let text_nodes = translatable_text_nodes(doc, element);
    let content: String = text_nodes.iter().filter_map(|n| doc.text(*n)).collect();
    let phrase = content.trim();
    if phrase.is_empty() {
        return false;
    }

    if let Some(key) = catalog.resolve_phrase(phrase, target)
        && let Some(value) = catalog.translate(target, key)
    {
        let mut changed = false;
        for node in &text_nodes {
            let Some(original) = doc.text(*node) else {
                continue;
            };
            if original.trim() != phrase {
                continue;
            }
            let padded = repad(original, value);
            changed |= doc.set_text(*node, &padded);
        }
        if changed {
            tracing::trace!(key, %target, "Phrase matched");
        }
        return changed;
    }

    let mut changed = false;
    for node in text_nodes {
        let Some(original) = doc.text(node) else {
            continue;
        };
        let rewritten = rewrite_tokens(original, target).into_owned();
        changed |= doc.set_text(node, &rewritten);
    }
    changed
}
