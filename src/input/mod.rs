//! Dictionary inputs: built-in tables and JSON dictionary files.

/// Built-in translation table
pub(crate) mod builtin;
pub mod dictionary;
pub mod discovery;

pub use dictionary::{
    DictionaryError,
    TranslationDictionary,
};
pub use discovery::DiscoveryError;
