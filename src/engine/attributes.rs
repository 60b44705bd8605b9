//! Translation of human-readable attributes (`placeholder`, `title`, `aria-label`).

use crate::config::I18nSettings;
use crate::dom::{
    Document,
    NodeId,
};
use crate::engine::token::rewrite_tokens;
use crate::ir::Catalog;
use crate::types::LanguageCode;

/// Computes the translated value of one attribute, if it has one.
fn translated_value(
    doc: &Document,
    catalog: &Catalog,
    settings: &I18nSettings,
    element: NodeId,
    attribute: &str,
    target: LanguageCode,
) -> Option<String> {
    let current = doc.attribute(element, attribute)?;

    let override_key = doc.attribute(element, &settings.override_attribute(attribute));
    if let Some(value) = override_key.and_then(|key| catalog.translate(target, key.trim())) {
        return Some(value.to_string());
    }

    if let Some(value) =
        catalog.resolve_phrase(current, target).and_then(|key| catalog.translate(target, key))
    {
        return Some(value.to_string());
    }

    Some(rewrite_tokens(current, target).into_owned())
}

/// Translates every configured attribute present on `element`.
///
/// Returns the number of attributes whose value changed.
pub fn translate_attributes(
    doc: &mut Document,
    catalog: &Catalog,
    settings: &I18nSettings,
    element: NodeId,
    target: LanguageCode,
) -> usize {
    let mut changed = 0;
    for attribute in &settings.translated_attributes {
        let Some(value) = translated_value(doc, catalog, settings, element, attribute, target)
        else {
            continue;
        };
        if doc.set_attribute(element, attribute, &value) {
            tracing::trace!(attribute = %attribute, %target, "Attribute translated");
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn input_with(doc: &mut Document, attributes: &[(&str, &str)]) -> NodeId {
        let body = doc.body().unwrap();
        let input = doc.create_element("input");
        for (name, value) in attributes {
            doc.set_attribute(input, name, value);
        }
        doc.append_child(body, input);
        input
    }

    #[rstest]
    #[case::reverse_index("Email", LanguageCode::Ar, "البريد الإلكتروني")]
    #[case::reverse_index_back("البريد الإلكتروني", LanguageCode::En, "Email")]
    #[case::token_rules("Level 4", LanguageCode::Ar, "المستوى 4")]
    #[case::untouched("Type here", LanguageCode::Ar, "Type here")]
    fn placeholder_translation(
        #[case] placeholder: &str,
        #[case] target: LanguageCode,
        #[case] expected: &str,
    ) {
        let mut doc = Document::new();
        let input = input_with(&mut doc, &[("placeholder", placeholder)]);

        translate_attributes(&mut doc, &Catalog::builtin(), &I18nSettings::default(), input, target);

        assert_eq!(doc.attribute(input, "placeholder"), Some(expected));
    }

    #[googletest::test]
    fn override_attribute_wins() {
        let mut doc = Document::new();
        let input = input_with(
            &mut doc,
            &[("placeholder", "Email"), ("data-i18n-placeholder", "searchPlaceholder")],
        );
        let catalog = Catalog::builtin();

        let changed = translate_attributes(
            &mut doc,
            &catalog,
            &I18nSettings::default(),
            input,
            LanguageCode::En,
        );

        expect_that!(changed, eq(1));
        expect_that!(
            doc.attribute(input, "placeholder"),
            eq(catalog.translate(LanguageCode::En, "searchPlaceholder"))
        );
    }

    #[googletest::test]
    fn translates_title_and_aria_label_and_counts_changes() {
        let mut doc = Document::new();
        let button =
            input_with(&mut doc, &[("title", "Logout"), ("aria-label", "Logout"), ("alt", "Logout")]);
        let catalog = Catalog::builtin();
        let settings = I18nSettings::default();

        let first = translate_attributes(&mut doc, &catalog, &settings, button, LanguageCode::Ar);
        let second = translate_attributes(&mut doc, &catalog, &settings, button, LanguageCode::Ar);

        expect_that!(first, eq(2));
        expect_that!(second, eq(0));
        expect_that!(doc.attribute(button, "title"), eq(catalog.translate(LanguageCode::Ar, "logout")));
        expect_that!(doc.attribute(button, "alt"), some(eq("Logout")));
    }
}
