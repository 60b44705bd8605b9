//! 翻訳カタログ（辞書 + 逆引きインデックス）
//!
//! 起動時に一度だけ構築し、以降は `Arc` で共有する読み取り専用データ。

use std::path::Path;

use crate::config::I18nSettings;
use crate::input::builtin::BUILTIN_ENTRIES;
use crate::input::dictionary::TranslationDictionary;
use crate::input::discovery::{
    DiscoveryError,
    load_project_dictionaries,
};
use crate::ir::reverse_index::ReverseIndex;
use crate::types::LanguageCode;

/// ある言語に欠けているキー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeys {
    pub language: LanguageCode,
    pub keys: Vec<String>,
}

/// 両言語の辞書と逆引きインデックス
#[derive(Debug, Clone)]
pub struct Catalog {
    /// アラビア語辞書
    ar: TranslationDictionary,
    /// 英語辞書
    en: TranslationDictionary,
    /// アラビア語の逆引き
    ar_index: ReverseIndex,
    /// 英語の逆引き
    en_index: ReverseIndex,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// 辞書から構築する
    #[must_use]
    pub fn new(ar: TranslationDictionary, en: TranslationDictionary) -> Self {
        let ar_index = ReverseIndex::build(&ar);
        let en_index = ReverseIndex::build(&en);
        Self { ar, en, ar_index, en_index }
    }

    /// 組み込みテーブルから構築する
    #[must_use]
    pub fn builtin() -> Self {
        let ar = BUILTIN_ENTRIES.iter().map(|(key, ar, _)| (*key, *ar)).collect();
        let en = BUILTIN_ENTRIES.iter().map(|(key, _, en)| (*key, *en)).collect();
        Self::new(ar, en)
    }

    /// 組み込みテーブルに外部辞書を重ねて構築する
    ///
    /// 同じ言語の辞書が複数ある場合は後のものが優先される。
    #[must_use]
    pub fn with_overlays(overlays: &[(LanguageCode, TranslationDictionary)]) -> Self {
        let builtin = Self::builtin();
        let (mut ar, mut en) = (builtin.ar, builtin.en);
        for (language, dictionary) in overlays {
            match language {
                LanguageCode::Ar => ar.merge(dictionary),
                LanguageCode::En => en.merge(dictionary),
            }
        }
        Self::new(ar, en)
    }

    /// プロジェクト配下の辞書ファイルを組み込みテーブルに重ねて構築する
    ///
    /// # Errors
    /// 辞書ファイルの探索または読み込みに失敗した場合
    pub fn from_project(project_root: &Path, settings: &I18nSettings) -> Result<Self, DiscoveryError> {
        let overlays = load_project_dictionaries(project_root, settings)?;
        Ok(Self::with_overlays(&overlays))
    }

    #[must_use]
    pub const fn dictionary(&self, language: LanguageCode) -> &TranslationDictionary {
        match language {
            LanguageCode::Ar => &self.ar,
            LanguageCode::En => &self.en,
        }
    }

    #[must_use]
    pub const fn reverse_index(&self, language: LanguageCode) -> &ReverseIndex {
        match language {
            LanguageCode::Ar => &self.ar_index,
            LanguageCode::En => &self.en_index,
        }
    }

    /// キーの翻訳を取得
    #[must_use]
    pub fn translate(&self, language: LanguageCode, key: &str) -> Option<&str> {
        self.dictionary(language).get(key)
    }

    /// 表示文字列から、`target` で翻訳可能なキーを逆引きする
    ///
    /// `target` 自身のインデックスを先に調べ、次に反対側の言語を調べる。
    /// 翻訳済みの文字列は必ず自分自身に解決されるため、再適用しても変化しない。
    #[must_use]
    pub fn resolve_phrase(&self, phrase: &str, target: LanguageCode) -> Option<&str> {
        [target, target.other()]
            .into_iter()
            .filter_map(|language| self.reverse_index(language).lookup(phrase))
            .find(|key| self.dictionary(target).contains_key(key))
    }

    /// 言語ごとに欠けているキーを返す（欠けがない言語は含まない）
    #[must_use]
    pub fn missing_keys(&self) -> Vec<MissingKeys> {
        LanguageCode::ALL
            .into_iter()
            .filter_map(|language| {
                let own = self.dictionary(language);
                let keys: Vec<String> = self
                    .dictionary(language.other())
                    .keys()
                    .filter(|key| !own.contains_key(key))
                    .map(str::to_string)
                    .collect();
                (!keys.is_empty()).then_some(MissingKeys { language, keys })
            })
            .collect()
    }
}
