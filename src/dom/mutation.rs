//! Change notifications emitted by a [`super::Document`].

use super::NodeId;

/// A single observed change.
///
/// Mirrors the two record types the translation observer cares about:
/// child-list changes and attribute changes. Text edits on existing text
/// nodes are not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRecord {
    ChildList { target: NodeId, added: Vec<NodeId>, removed: usize },
    Attribute { target: NodeId, name: String },
}

impl MutationRecord {
    #[must_use]
    pub const fn target(&self) -> NodeId {
        match self {
            Self::ChildList { target, .. } | Self::Attribute { target, .. } => *target,
        }
    }

    /// Whether this record passes an attribute filter.
    ///
    /// Child-list records always pass.
    #[must_use]
    pub fn matches_attributes(&self, observed: &[String]) -> bool {
        match self {
            Self::ChildList { .. } => true,
            Self::Attribute { name, .. } => observed.iter().any(|attr| attr == name),
        }
    }
}
