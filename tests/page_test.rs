//! ページ全体の言語切り替えに関するテスト

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use catalog_i18n::config::I18nSettings;
use catalog_i18n::dom::Document;
use catalog_i18n::engine::ChangeObserver;
use catalog_i18n::ir::Catalog;
use catalog_i18n::storage::{
    JsonFileStore,
    PreferenceStore,
};
use catalog_i18n::types::LanguageCode;
use catalog_i18n::{
    LanguageContext,
    PageState,
    Translator,
};
use tempfile::TempDir;

const CATALOG_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>SEU Computing College</title></head>
<body class="bg-gray-50">
  <header>
    <h1 class="gradient-text">Saudi Electronic University</h1>
    <button id="language-toggle"><i class="fas fa-language"></i> <span>English</span></button>
    <span id="language-text">English</span>
    <a id="nav-account" href="account.html"><i class="fas fa-user"></i> My Account</a>
  </header>
  <input id="searchInput" type="text" placeholder="Search">
  <ul id="results">
    <li class="course"><span class="badge">Level 3</span> <span>4 hours</span></li>
  </ul>
  <form>
    <input data-i18n="email" type="email">
    <button type="submit" data-i18n="login">Login</button>
  </form>
</body>
</html>"#;

fn page_state(store_path: &std::path::Path) -> PageState {
    let translator =
        Translator::new(Arc::new(Catalog::builtin()), Arc::new(I18nSettings::default()));
    let context = LanguageContext::new(translator, Box::new(JsonFileStore::new(store_path)));
    PageState::new(Document::parse_html(CATALOG_PAGE), context)
}

async fn html_of(state: &PageState) -> String {
    state.document.lock().await.to_html()
}

#[tokio::test]
async fn first_load_applies_arabic_and_toggle_persists_english() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("prefs.json");
    let state = page_state(&store_path);

    assert_eq!(state.initialize().await, LanguageCode::Ar);
    let arabic = html_of(&state).await;
    assert!(arabic.contains(r#"dir="rtl""#));
    assert!(arabic.contains("حسابي"));
    assert!(arabic.contains("المستوى 3"));
    assert!(arabic.contains("4 ساعات"));
    assert!(arabic.contains("lang-ar"));

    assert_eq!(state.toggle().await, LanguageCode::En);
    let english = html_of(&state).await;
    assert!(english.contains(r#"dir="ltr""#));
    assert!(english.contains("My Account"));
    assert!(english.contains("Level 3"));
    assert!(english.contains("4 hours"));
    assert!(english.contains("bg-gray-50 lang-en"));

    let store = JsonFileStore::new(&store_path);
    assert_eq!(store.get("siteLanguage").unwrap().as_deref(), Some("en"));
}

#[tokio::test]
async fn preference_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("prefs.json");

    let first = page_state(&store_path);
    first.initialize().await;
    first.toggle().await;

    let reloaded = page_state(&store_path);
    assert_eq!(reloaded.initialize().await, LanguageCode::En);
    assert!(html_of(&reloaded).await.contains(r#"lang="en""#));
}

#[tokio::test]
async fn toggling_twice_restores_page() {
    let temp_dir = TempDir::new().unwrap();
    let state = page_state(&temp_dir.path().join("prefs.json"));
    state.initialize().await;
    let before = html_of(&state).await;

    state.toggle().await;
    state.toggle().await;

    assert_eq!(html_of(&state).await, before);
}

#[tokio::test(start_paused = true)]
async fn search_results_rendered_later_are_translated() {
    let temp_dir = TempDir::new().unwrap();
    let state = page_state(&temp_dir.path().join("prefs.json"));
    state.initialize().await;
    let handle = ChangeObserver::spawn(&state).await;

    let item = {
        let mut document = state.document.lock().await;
        let results = document.element_by_id("results").unwrap();
        let item = document.create_element("li");
        let text = document.create_text("Level 5 - 2 hours");
        document.append_child(item, text);
        document.append_child(results, item);
        item
    };
    tokio::time::sleep(Duration::from_secs(1)).await;

    let document = state.document.lock().await;
    assert_eq!(document.text_content(item), "المستوى 5 - ساعتان");
    drop(document);
    assert_eq!(handle.reruns(), 1);
    handle.disconnect();
}

#[tokio::test(start_paused = true)]
async fn keyed_element_inserted_later_is_translated() {
    let temp_dir = TempDir::new().unwrap();
    let state = page_state(&temp_dir.path().join("prefs.json"));
    state.initialize().await;
    let handle = ChangeObserver::spawn(&state).await;

    let details = {
        let mut document = state.document.lock().await;
        let body = document.body().unwrap();
        let div = document.create_element("div");
        document.set_attribute(div, "data-i18n", "courseDetails");
        let text = document.create_text("Course Details");
        document.append_child(div, text);
        document.append_child(body, div);
        div
    };
    tokio::time::sleep(Duration::from_millis(200)).await;

    let document = state.document.lock().await;
    assert_eq!(document.text_content(details), "تفاصيل المادة");
    assert_eq!(document.attribute(details, "data-i18n"), Some("courseDetails"));
    drop(document);
    assert_eq!(handle.reruns(), 1);
    handle.disconnect();
}
