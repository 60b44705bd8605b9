//! Language application over a whole document.

use std::sync::Arc;

use crate::config::I18nSettings;
use crate::dom::{
    Document,
    NodeId,
};
use crate::engine::attributes::translate_attributes;
use crate::engine::node::translate_node;
use crate::ir::Catalog;
use crate::types::LanguageCode;

/// `input` types that take free text and therefore a placeholder.
const TEXT_INPUT_TYPES: [&str; 6] = ["text", "search", "email", "password", "tel", "url"];

/// Number of changes made by one `apply_language` pass, per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// `dir` / `lang` / body class
    pub document: usize,
    /// Elements with an explicit key
    pub annotated: usize,
    /// Candidate elements translated by phrase or token rules
    pub best_effort: usize,
    /// Translated attribute values
    pub attributes: usize,
    /// Current-language indicators
    pub indicators: usize,
    /// Toggle button labels
    pub toggles: usize,
    /// `<title>`
    pub title: usize,
    /// Placeholder bindings
    pub bindings: usize,
}

impl ApplyReport {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.document
            + self.annotated
            + self.best_effort
            + self.attributes
            + self.indicators
            + self.toggles
            + self.title
            + self.bindings
    }

    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.total() == 0
    }
}

/// Applies a language to documents using a shared catalog and settings.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Dictionaries and reverse indexes
    catalog: Arc<Catalog>,
    /// Attribute names, element ids and candidate tags
    settings: Arc<I18nSettings>,
}

impl Translator {
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>, settings: Arc<I18nSettings>) -> Self {
        Self { catalog, settings }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    /// Brings every translatable part of `doc` into `language`.
    ///
    /// Missing keys or elements leave content unchanged. Applying the same
    /// language twice makes no changes the second time.
    pub fn apply_language(&self, doc: &mut Document, language: LanguageCode) -> ApplyReport {
        let mut report = ApplyReport {
            document: self.apply_document_attributes(doc, language),
            ..ApplyReport::default()
        };

        let key_attribute = self.settings.key_attribute.as_str();
        let (annotated, others): (Vec<NodeId>, Vec<NodeId>) =
            doc.elements().into_iter().partition(|id| doc.has_attribute(*id, key_attribute));

        for element in &annotated {
            if self.apply_key(doc, *element, language) {
                report.annotated += 1;
            }
            report.attributes +=
                translate_attributes(doc, &self.catalog, &self.settings, *element, language);
        }

        for element in &others {
            let is_candidate =
                doc.tag_name(*element).is_some_and(|tag| self.settings.is_candidate_tag(tag));
            if is_candidate && translate_node(doc, &self.catalog, *element, language) {
                report.best_effort += 1;
            }
        }

        for element in &others {
            report.attributes +=
                translate_attributes(doc, &self.catalog, &self.settings, *element, language);
        }

        for indicator in &self.settings.indicators {
            if let Some(element) = doc.element_by_id(&indicator.id)
                && let Some(value) = self.catalog.translate(language, &indicator.key)
                && doc.replace_text(element, value)
            {
                report.indicators += 1;
            }
        }

        report.toggles = self.apply_toggle_labels(doc, language);

        if let Some(title_key) = &self.settings.title_key
            && let Some(title) = doc.first_by_tag("title")
            && let Some(value) = self.catalog.translate(language, title_key)
            && doc.replace_text(title, value)
        {
            report.title += 1;
        }

        for binding in &self.settings.placeholder_bindings {
            if let Some(element) = doc.element_by_id(&binding.id)
                && let Some(value) = self.catalog.translate(language, &binding.key)
                && doc.set_attribute(element, "placeholder", value)
            {
                report.bindings += 1;
            }
        }

        tracing::debug!(
            %language,
            document = report.document,
            annotated = report.annotated,
            best_effort = report.best_effort,
            attributes = report.attributes,
            indicators = report.indicators,
            toggles = report.toggles,
            title = report.title,
            bindings = report.bindings,
            "Language applied"
        );
        report
    }

    /// `dir` and `lang` on the document element, language class on `<body>`.
    fn apply_document_attributes(&self, doc: &mut Document, language: LanguageCode) -> usize {
        let mut changed = 0;
        if let Some(root) = doc.document_element() {
            changed += usize::from(doc.set_attribute(root, "dir", language.direction().as_attr()));
            changed += usize::from(doc.set_attribute(root, "lang", language.code()));
        }
        if let Some(body) = doc.body() {
            let classes = body_classes(doc.attribute(body, "class").unwrap_or_default(), language);
            changed += usize::from(doc.set_attribute(body, "class", &classes));
        }
        changed
    }

    /// Translates one element carrying the key attribute.
    fn apply_key(&self, doc: &mut Document, element: NodeId, language: LanguageCode) -> bool {
        let Some(key) = doc.attribute(element, &self.settings.key_attribute).map(str::trim) else {
            return false;
        };
        let Some(value) = self.catalog.translate(language, key) else {
            tracing::trace!(key, %language, "Key missing from dictionary");
            return false;
        };
        if is_text_entry(doc, element) {
            return doc.set_attribute(element, "placeholder", value);
        }
        // チェックボックス等は表示テキストを持たない
        if doc.tag_name(element) == Some("input") {
            return false;
        }
        doc.replace_text_except(element, value, &self.settings.key_attribute)
    }

    /// Labels each toggle button with the language it switches to.
    fn apply_toggle_labels(&self, doc: &mut Document, language: LanguageCode) -> usize {
        let label_attribute = self.settings.toggle_label_attribute(language);
        let mut changed = 0;
        for id in &self.settings.toggle_buttons {
            let Some(button) = doc.element_by_id(id) else {
                continue;
            };
            let label = doc.attribute(button, &label_attribute).map(str::to_string).or_else(|| {
                self.catalog.translate(language, &self.settings.toggle_label_key).map(str::to_string)
            });
            if let Some(label) = label
                && doc.replace_text(button, &label)
            {
                changed += 1;
            }
        }
        changed
    }
}

/// `input` without a type or with a textual type, or `textarea`.
fn is_text_entry(doc: &Document, element: NodeId) -> bool {
    match doc.tag_name(element) {
        Some("textarea") => true,
        Some("input") => doc.attribute(element, "type").is_none_or(|kind| {
            let kind = kind.trim();
            kind.is_empty() || TEXT_INPUT_TYPES.iter().any(|t| t.eq_ignore_ascii_case(kind))
        }),
        _ => false,
    }
}

/// Replaces any supported `lang-*` class with the one for `language`.
fn body_classes(current: &str, language: LanguageCode) -> String {
    let language_classes = LanguageCode::ALL.map(LanguageCode::body_class);
    let mut classes: Vec<&str> = current
        .split_whitespace()
        .filter(|class| !language_classes.iter().any(|c| c == class))
        .collect();
    let target = language.body_class();
    classes.push(&target);
    classes.join(" ")
}
