//! ページの共有状態

use std::sync::Arc;

use tokio::sync::{
    Mutex,
    MutexGuard,
};

use crate::dom::Document;
use crate::engine::LanguageContext;
use crate::types::LanguageCode;

/// ページの共有状態
///
/// ユーザー操作（トグル）と変更監視タスクの間で共有する。
///
/// # ロック順序
///
/// 両方のロックを取得する場合は、以下の順序を厳守してください：
/// 1. `document`
/// 2. `context`
#[derive(Clone)]
pub struct PageState {
    /// 翻訳対象のドキュメント
    pub document: Arc<Mutex<Document>>,
    /// 言語設定
    pub context: Arc<Mutex<LanguageContext>>,
}

impl PageState {
    #[must_use]
    pub fn new(document: Document, context: LanguageContext) -> Self {
        Self { document: Arc::new(Mutex::new(document)), context: Arc::new(Mutex::new(context)) }
    }

    /// `document` と `context` のロックを一括取得
    ///
    /// ロック順序（`document` → `context`）を保証します。
    pub async fn lock_all(&self) -> (MutexGuard<'_, Document>, MutexGuard<'_, LanguageContext>) {
        let document = self.document.lock().await;
        let context = self.context.lock().await;
        (document, context)
    }

    /// 保存済みの言語をページに適用する
    pub async fn initialize(&self) -> LanguageCode {
        let (mut document, mut context) = self.lock_all().await;
        context.initialize(&mut document)
    }

    /// 言語を切り替える
    pub async fn toggle(&self) -> LanguageCode {
        let (mut document, mut context) = self.lock_all().await;
        context.toggle(&mut document)
    }
}

impl std::fmt::Debug for PageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageState")
            .field("document", &"<Document>")
            .field("context", &"<LanguageContext>")
            .finish()
    }
}
