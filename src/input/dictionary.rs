//! Translation dictionary input definitions

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::types::LanguageCode;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dictionary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Dictionary file must contain a JSON object at the top level: {path}")]
    NotAnObject { path: String },

    #[error("Could not detect the language of dictionary file: {path}")]
    UnknownLanguage { path: String },
}

/// Ordered key → localized string table for one language.
///
/// Entries keep authoring order; inserting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationDictionary {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl TranslationDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.positions.get(&key).and_then(|i| self.entries.get_mut(*i)) {
            slot.1 = value;
            return;
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let index = self.positions.get(key)?;
        self.entries.get(*index).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Entries in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlays `other` on top of `self`.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

/// Flatten nested JSON object into a separator-joined dictionary.
///
/// Document order is kept. Arrays use `[index]` notation.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use catalog_i18n::input::dictionary::flatten_json;
///
/// let json = json!({
///     "nav": {
///         "home": "Home",
///         "login": "Login"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".");
/// assert_eq!(flattened.get("nav.home"), Some("Home"));
/// assert_eq!(flattened.get("nav.login"), Some("Login"));
/// ```
#[must_use]
pub fn flatten_json(json: &Value, separator: &str) -> TranslationDictionary {
    let mut result = TranslationDictionary::new();
    flatten_json_value(json, separator, None, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut TranslationDictionary,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key, s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key, json.to_string());
            }
        }
    }
}

/// Matches a path component such as `ar`, `en-US` or `en_gb`.
fn language_from_part(part: &str) -> Option<LanguageCode> {
    let (base, region) = match part.split_once(['-', '_']) {
        Some((base, region)) => (base, Some(region)),
        None => (part, None),
    };
    if let Some(region) = region
        && !(region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
    {
        return None;
    }
    if base.len() != 2 {
        return None;
    }
    LanguageCode::from_code(base)
}

/// Detect language from file path heuristically
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that is a supported language tag.
///
/// # Examples
/// - `locales/ar.json` → `ar`
/// - `locales/en-US/common.json` → `en`
/// - `i18n/en/ar.json` → `ar` (last match wins)
#[must_use]
pub fn detect_language_from_path(file_path: &Path) -> Option<LanguageCode> {
    let path_str = file_path.to_string_lossy();
    path_str.split(['/', '\\', '.']).rev().find_map(language_from_part)
}

/// Load a dictionary file and detect its language.
///
/// # Errors
/// Returns error if the file cannot be read, is not a JSON object, or its
/// language cannot be detected from the path.
pub fn load_dictionary_file(
    file_path: &Path,
    separator: &str,
) -> Result<(LanguageCode, TranslationDictionary), DictionaryError> {
    let language = detect_language_from_path(file_path).ok_or_else(|| {
        DictionaryError::UnknownLanguage { path: file_path.to_string_lossy().to_string() }
    })?;
    let dictionary = read_dictionary_file(file_path, language, separator)?;
    Ok((language, dictionary))
}

/// Load a dictionary file whose language is already known.
///
/// # Errors
/// Returns error if the file cannot be read or is not a JSON object.
pub fn read_dictionary_file(
    file_path: &Path,
    language: LanguageCode,
    separator: &str,
) -> Result<TranslationDictionary, DictionaryError> {
    let path = file_path.to_string_lossy().to_string();
    let content = std::fs::read_to_string(file_path)?;
    let json: Value = serde_json::from_str(&content)?;
    if !json.is_object() {
        return Err(DictionaryError::NotAnObject { path });
    }

    let dictionary = flatten_json(&json, separator);
    tracing::debug!(%language, path = %path, entries = dictionary.len(), "Loaded dictionary file");
    Ok(dictionary)
}
