//! Translation engine: applier, node and attribute translators, token rules,
//! language context and change observer.

pub mod applier;
pub mod attributes;
pub mod context;
pub mod node;
pub mod observer;
pub mod token;

pub use applier::{
    ApplyReport,
    Translator,
};
pub use context::LanguageContext;
pub use observer::{
    ChangeObserver,
    ObserverHandle,
};
