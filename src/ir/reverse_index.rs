//! 表示文字列 → 辞書キーの逆引きインデックス

use std::collections::HashMap;

use crate::input::dictionary::TranslationDictionary;

/// 同じ表示文字列を持つキーの衝突
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// 衝突した表示文字列
    pub phrase: String,
    /// 上書きされたキー
    pub shadowed: String,
    /// 残ったキー
    pub winner: String,
}

/// 一言語分の逆引きインデックス
///
/// 辞書を作成順に反転して構築する。複数のキーが同じ文字列を持つ場合は
/// 後から現れたキーが残る（情報が失われる単純化）。衝突は `collisions` に記録される。
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    /// 表示文字列 → キー
    phrases: HashMap<String, String>,
    /// 構築時に検出した衝突（発生順）
    collisions: Vec<Collision>,
}

impl ReverseIndex {
    #[must_use]
    pub fn build(dictionary: &TranslationDictionary) -> Self {
        let mut index = Self::default();
        for (key, value) in dictionary.iter() {
            let phrase = value.trim();
            if phrase.is_empty() {
                continue;
            }
            if let Some(previous) = index.phrases.insert(phrase.to_string(), key.to_string())
                && previous != key
            {
                index.collisions.push(Collision {
                    phrase: phrase.to_string(),
                    shadowed: previous,
                    winner: key.to_string(),
                });
            }
        }
        if !index.collisions.is_empty() {
            tracing::debug!(count = index.collisions.len(), "Reverse index collisions");
        }
        index
    }

    /// 完全一致（前後の空白は無視）でキーを引く
    #[must_use]
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.phrases.get(phrase.trim()).map(String::as_str)
    }

    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
