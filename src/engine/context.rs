//! Current-language context: preference persistence and toggling.

use crate::dom::Document;
use crate::engine::applier::{
    ApplyReport,
    Translator,
};
use crate::storage::PreferenceStore;
use crate::types::LanguageCode;

/// Owns the persisted language preference for one page.
///
/// Storage failures never surface: a failed read falls back to the default
/// language and a failed write is logged and ignored.
#[derive(Debug)]
pub struct LanguageContext {
    /// Applies languages to documents
    translator: Translator,
    /// Durable preference storage
    store: Box<dyn PreferenceStore>,
    /// Language of the last `apply`
    current: Option<LanguageCode>,
}

impl LanguageContext {
    #[must_use]
    pub fn new(translator: Translator, store: Box<dyn PreferenceStore>) -> Self {
        Self { translator, store, current: None }
    }

    #[must_use]
    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Language most recently applied through this context.
    #[must_use]
    pub const fn current(&self) -> Option<LanguageCode> {
        self.current
    }

    /// Persisted preference, or the configured default when unset or unreadable.
    #[must_use]
    pub fn current_preference(&self) -> LanguageCode {
        let settings = self.translator.settings();
        let default = settings.default_language;
        match self.store.get(&settings.storage_key) {
            Ok(Some(stored)) => LanguageCode::from_code(&stored).unwrap_or_else(|| {
                tracing::warn!(stored = %stored, %default, "Ignoring unsupported stored language");
                default
            }),
            Ok(None) => default,
            Err(err) => {
                tracing::warn!(%err, %default, "Failed to read language preference");
                default
            }
        }
    }

    /// Writes the preference, logging failures.
    fn persist(&mut self, language: LanguageCode) {
        let key = &self.translator.settings().storage_key;
        if let Err(err) = self.store.set(key, language.code()) {
            tracing::warn!(%err, %language, "Failed to persist language preference");
        }
    }

    /// Applies `language` and remembers it.
    fn apply(&mut self, doc: &mut Document, language: LanguageCode) -> ApplyReport {
        let report = self.translator.apply_language(doc, language);
        self.current = Some(language);
        report
    }

    /// Applies the persisted preference (page load).
    pub fn initialize(&mut self, doc: &mut Document) -> LanguageCode {
        let language = self.current_preference();
        self.apply(doc, language);
        tracing::info!(%language, "Language initialized");
        language
    }

    /// Re-applies the persisted preference without changing it.
    pub fn reapply(&mut self, doc: &mut Document) -> ApplyReport {
        let language = self.current_preference();
        self.apply(doc, language)
    }

    /// Switches to the other language, persists it and applies it.
    pub fn toggle(&mut self, doc: &mut Document) -> LanguageCode {
        let next = self.current_preference().other();
        self.persist(next);
        self.apply(doc, next);
        tracing::info!(language = %next, "Language toggled");
        next
    }

    /// Persists and applies an explicit choice.
    pub fn set_language(&mut self, doc: &mut Document, language: LanguageCode) -> ApplyReport {
        self.persist(language);
        self.apply(doc, language)
    }
}
