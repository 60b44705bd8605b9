//! catalog-i18n
//!
//! コースカタログ向けの実行時アラビア語 / 英語切り替えエンジン。
//! 辞書と逆引きインデックスを一度だけ構築し、ドキュメントのテキストと属性を
//! 選択中の言語に書き換える。

pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod input;
pub mod ir;
pub mod page;
pub mod storage;
pub mod types;

pub use engine::{
    LanguageContext,
    Translator,
};
pub use error::Error;
pub use page::PageState;
