use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::LanguageCode;

/// Attributes the engine knows how to translate.
pub const TRANSLATABLE_ATTRIBUTES: &[&str] = &["placeholder", "title", "aria-label"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "candidateTags[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Language used when no preference has been persisted.
    pub default_language: LanguageCode,

    /// Storage key of the persisted language preference.
    pub storage_key: String,

    /// Attribute naming a dictionary key for an element's text.
    pub key_attribute: String,
    /// Prefix of per-attribute key overrides (`data-i18n-placeholder`, ...).
    pub attribute_override_prefix: String,
    /// Prefix of per-language toggle label overrides (`data-label-en`, ...).
    pub toggle_label_prefix: String,

    /// Tags eligible for best-effort translation when not annotated.
    pub candidate_tags: Vec<String>,
    /// Attributes translated in place. Subset of `placeholder`, `title`, `aria-label`.
    pub translated_attributes: Vec<String>,

    /// Current-language indicator elements.
    pub indicators: Vec<ElementBinding>,
    /// Elements whose placeholder is bound to a key by id.
    pub placeholder_bindings: Vec<ElementBinding>,
    /// Ids of language toggle buttons.
    pub toggle_buttons: Vec<String>,
    /// Dictionary key of the default toggle label.
    pub toggle_label_key: String,
    /// Dictionary key for the `<title>` element; `None` leaves it alone.
    pub title_key: Option<String>,

    pub observer: ObserverConfig,
    pub dictionary_files: DictionaryFilesConfig,
    pub key_separator: String,
}

/// Binds an element id to a dictionary key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBinding {
    pub id: String,
    pub key: String,
}

impl ElementBinding {
    #[must_use]
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self { id: id.into(), key: key.into() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObserverConfig {
    /// Quiet period before re-translating after a change batch.
    pub debounce_ms: u64,
}

impl ObserverConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { debounce_ms: 150 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryFilesConfig {
    pub file_pattern: String,
}

impl Default for DictionaryFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/locales/*.json".to_string() }
    }
}

impl I18nSettings {
    /// Override attribute for `attribute` (e.g. `data-i18n-placeholder`).
    #[must_use]
    pub fn override_attribute(&self, attribute: &str) -> String {
        format!("{}{attribute}", self.attribute_override_prefix)
    }

    /// Per-language toggle label attribute (e.g. `data-label-en`).
    #[must_use]
    pub fn toggle_label_attribute(&self, language: LanguageCode) -> String {
        format!("{}{}", self.toggle_label_prefix, language.code())
    }

    #[must_use]
    pub fn is_candidate_tag(&self, tag: &str) -> bool {
        self.candidate_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// # Errors
    /// - Required field is empty
    /// - Unsupported attribute
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let required = [
            ("storageKey", &self.storage_key),
            ("keyAttribute", &self.key_attribute),
            ("attributeOverridePrefix", &self.attribute_override_prefix),
            ("toggleLabelPrefix", &self.toggle_label_prefix),
            ("toggleLabelKey", &self.toggle_label_key),
            ("keySeparator", &self.key_separator),
        ];
        for (field, value) in required {
            if value.is_empty() {
                errors.push(ValidationError::new(field, "The value cannot be empty"));
            }
        }

        if self.candidate_tags.is_empty() {
            errors.push(ValidationError::new(
                "candidateTags",
                "At least one tag is required. Example: [\"button\", \"a\", \"p\"]",
            ));
        }
        for (index, tag) in self.candidate_tags.iter().enumerate() {
            if tag.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("candidateTags[{index}]"),
                    "The tag name cannot be empty",
                ));
            }
        }

        for (index, attribute) in self.translated_attributes.iter().enumerate() {
            if !TRANSLATABLE_ATTRIBUTES.contains(&attribute.as_str()) {
                errors.push(ValidationError::new(
                    format!("translatedAttributes[{index}]"),
                    format!(
                        "Unsupported attribute '{attribute}'. Supported: {}",
                        TRANSLATABLE_ATTRIBUTES.join(", ")
                    ),
                ));
            }
        }

        for (name, bindings) in
            [("indicators", &self.indicators), ("placeholderBindings", &self.placeholder_bindings)]
        {
            for (index, binding) in bindings.iter().enumerate() {
                if binding.id.is_empty() || binding.key.is_empty() {
                    errors.push(ValidationError::new(
                        format!("{name}[{index}]"),
                        "Both 'id' and 'key' are required",
                    ));
                }
            }
        }

        if let Some(key) = &self.title_key
            && key.is_empty()
        {
            errors.push(ValidationError::new(
                "titleKey",
                "The key cannot be empty. Remove this field to leave <title> untouched",
            ));
        }

        if self.observer.debounce_ms == 0 {
            errors.push(ValidationError::new(
                "observer.debounceMs",
                "The debounce interval must be greater than zero",
            ));
        }

        if self.dictionary_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "dictionaryFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/locales/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.dictionary_files.file_pattern) {
            errors.push(ValidationError::new(
                "dictionaryFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.dictionary_files.file_pattern),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: LanguageCode::primary(),
            storage_key: "siteLanguage".to_string(),
            key_attribute: "data-i18n".to_string(),
            attribute_override_prefix: "data-i18n-".to_string(),
            toggle_label_prefix: "data-label-".to_string(),
            candidate_tags: [
                "button", "a", "option", "h1", "h2", "h3", "h4", "h5", "h6", "label", "p", "li",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            translated_attributes: TRANSLATABLE_ATTRIBUTES.iter().map(ToString::to_string).collect(),
            indicators: vec![
                ElementBinding::new("language-text", "languageText"),
                ElementBinding::new("mobile-language-text", "mobileLanguageText"),
            ],
            placeholder_bindings: vec![ElementBinding::new("searchInput", "searchPlaceholder")],
            toggle_buttons: vec!["language-toggle".to_string(), "mobile-language-toggle".to_string()],
            toggle_label_key: "toggleLanguage".to_string(),
            title_key: Some("siteTitle".to_string()),
            observer: ObserverConfig::default(),
            dictionary_files: DictionaryFilesConfig::default(),
            key_separator: ".".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = I18nSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"defaultLanguage": "en", "observer": {"debounceMs": 20}}"#;

        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.default_language, eq(LanguageCode::En));
        assert_that!(settings.observer.debounce_ms, eq(20));
        assert_that!(settings.storage_key, eq("siteLanguage"));
        assert_that!(settings.toggle_buttons, len(eq(2)));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: I18nSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings.default_language, eq(LanguageCode::Ar));
        assert_that!(settings.key_attribute, eq("data-i18n"));
        assert_that!(
            settings.translated_attributes,
            elements_are![eq("placeholder"), eq("title"), eq("aria-label")]
        );
        assert_that!(settings.title_key, some(eq("siteTitle")));
        assert_that!(settings.dictionary_files.file_pattern, eq("**/locales/*.json"));
    }

    #[rstest]
    fn deserialize_unknown_language_fails() {
        let result = serde_json::from_str::<I18nSettings>(r#"{"defaultLanguage": "fr"}"#);

        assert!(result.is_err());
    }

    #[rstest]
    fn override_and_label_attribute_names() {
        let settings = I18nSettings::default();

        assert_that!(settings.override_attribute("aria-label"), eq("data-i18n-aria-label"));
        assert_that!(settings.toggle_label_attribute(LanguageCode::En), eq("data-label-en"));
        assert_that!(settings.is_candidate_tag("BUTTON"), eq(true));
        assert_that!(settings.is_candidate_tag("div"), eq(false));
    }

    #[rstest]
    fn validate_invalid_key_attribute_empty() {
        let settings = I18nSettings { key_attribute: String::new(), ..I18nSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("keyAttribute")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_unsupported_attribute() {
        let settings = I18nSettings {
            translated_attributes: vec!["title".to_string(), "href".to_string()],
            ..I18nSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translatedAttributes[1]")),
                field!(ValidationError.message, contains_substring("'href'"))
            ]])
        );
    }

    #[rstest]
    fn validate_incomplete_binding() {
        let settings = I18nSettings {
            indicators: vec![ElementBinding::new("language-text", "")],
            ..I18nSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("indicators[0]"))])
        );
    }

    #[rstest]
    fn validate_zero_debounce() {
        let settings =
            I18nSettings { observer: ObserverConfig { debounce_ms: 0 }, ..I18nSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("observer.debounceMs"))])
        );
    }

    #[rstest]
    fn validate_invalid_dictionary_pattern() {
        let settings = I18nSettings {
            dictionary_files: DictionaryFilesConfig { file_pattern: "**/{locales/*.json".to_string() },
            ..I18nSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("dictionaryFiles.filePattern")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = I18nSettings {
            storage_key: String::new(),
            candidate_tags: vec![],
            ..I18nSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. storageKey"));
        assert_that!(error_message, contains_substring("2. candidateTags"));
        assert_that!(error_message, contains_substring("At least one tag"));
    }
}
