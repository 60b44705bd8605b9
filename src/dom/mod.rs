//! In-memory document tree the translation engine operates on.

/// Arena document and tree operations
mod document;
/// HTML parse / serialize bridge
mod html;
/// Change records
mod mutation;
/// Node types
mod node;

pub use document::Document;
pub(crate) use document::repad;
pub use mutation::MutationRecord;
pub use node::{
    ElementData,
    NodeId,
    NodeKind,
};
