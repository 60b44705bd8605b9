//! 辞書ファイルの探索と読み込み

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use thiserror::Error;

use super::dictionary::{
    DictionaryError,
    TranslationDictionary,
    detect_language_from_path,
    read_dictionary_file,
};
use crate::config::I18nSettings;
use crate::types::LanguageCode;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Invalid dictionary file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to load dictionary '{path}': {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: DictionaryError,
    },
}

/// パターンから `GlobSet` を構築
fn build_glob_set(pattern: &str) -> Result<GlobSet, DiscoveryError> {
    let invalid = |source| DiscoveryError::InvalidPattern { pattern: pattern.to_string(), source };
    let glob = Glob::new(pattern).map_err(invalid)?;
    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    builder.build().map_err(invalid)
}

/// プロジェクト配下の辞書ファイルを検索
///
/// 結果はパス順にソートされる（後のファイルほど優先して上書きされる）。
///
/// # Errors
/// パターンが不正な場合
pub fn find_dictionary_files(
    project_root: &Path,
    settings: &I18nSettings,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let include_set = build_glob_set(&settings.dictionary_files.file_pattern)?;
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(project_root)
        .hidden(false)
        .git_ignore(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(project_root) else {
            continue;
        };
        if !include_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    Ok(found_files)
}

/// プロジェクト配下の辞書ファイルをすべて読み込む
///
/// 言語はプロジェクトルートからの相対パスで判定する。判定できないファイルはスキップする。
///
/// # Errors
/// - パターンが不正
/// - ファイル読み込みまたは JSON パースエラー
pub fn load_project_dictionaries(
    project_root: &Path,
    settings: &I18nSettings,
) -> Result<Vec<(LanguageCode, TranslationDictionary)>, DiscoveryError> {
    let mut dictionaries = Vec::new();

    for path in find_dictionary_files(project_root, settings)? {
        let relative_path = path.strip_prefix(project_root).unwrap_or(&path);
        let Some(language) = detect_language_from_path(relative_path) else {
            tracing::warn!("Skipping dictionary file with unknown language: {:?}", path);
            continue;
        };
        let dictionary = read_dictionary_file(&path, language, &settings.key_separator)
            .map_err(|source| DiscoveryError::Load { path: path.clone(), source })?;
        dictionaries.push((language, dictionary));
    }

    tracing::debug!(count = dictionaries.len(), "Loaded project dictionaries");
    Ok(dictionaries)
}
