//! Regex token rewriting for text with no whole-string dictionary match.
//!
//! Rules are ordered per target language and applied in sequence to the
//! full string. No rule's output matches a later rule of the same
//! direction, so rewriting twice towards the same language changes nothing.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{
    Captures,
    Regex,
};

use crate::types::LanguageCode;

/// Builds the replacement for one match.
type Rewrite = fn(&Captures<'_>) -> String;

/// One ordered rewrite rule.
struct TokenRule {
    /// Rule name for trace logs
    name: &'static str,
    /// Compiled pattern
    pattern: Regex,
    /// Replacement builder
    rewrite: Rewrite,
}

/// Uncompiled rule: name, pattern and replacement builder.
type Definition = (&'static str, &'static str, Rewrite);

/// Builds a rule definition.
const fn rule(name: &'static str, pattern: &'static str, rewrite: Rewrite) -> Definition {
    (name, pattern, rewrite)
}

/// Compiles rule definitions, dropping any pattern that fails to compile.
fn compile(definitions: &[Definition]) -> Vec<TokenRule> {
    definitions
        .iter()
        .filter_map(|&(name, pattern, rewrite)| match Regex::new(pattern) {
            Ok(pattern) => Some(TokenRule { name, pattern, rewrite }),
            Err(err) => {
                tracing::warn!(rule = name, %err, "Skipping token rule with invalid pattern");
                None
            }
        })
        .collect()
}

/// Rules producing Arabic text.
static TO_ARABIC: LazyLock<Vec<TokenRule>> = LazyLock::new(|| {
    compile(&[
        rule("level", r"\bLevel\s+(\d+)\b", |caps| with_number(caps, |n| format!("المستوى {n}"))),
        rule("hours", r"(?i)\b(\d+)\s+(?:hours?|hrs?)\b", |caps| with_number(caps, arabic_hours)),
        rule("beginner", r"\bBeginner\b", |_| "مبتدئ".to_string()),
        rule("intermediate", r"\bIntermediate\b", |_| "متوسط".to_string()),
        rule("advanced", r"\bAdvanced\b", |_| "متقدم".to_string()),
    ])
});

/// Rules producing English text.
static TO_ENGLISH: LazyLock<Vec<TokenRule>> = LazyLock::new(|| {
    compile(&[
        rule("level", r"المستوى\s*(\d+)", |caps| with_number(caps, |n| format!("Level {n}"))),
        rule("one-hour", r"ساعة واحدة", |_| "1 hour".to_string()),
        rule("hours", r"(\d+)\s*(?:ساعات|ساعة)", |caps| with_number(caps, english_hours)),
        rule("two-hours", r"ساعتان", |_| "2 hours".to_string()),
        rule("beginner", r"\bمبتدئ\b", |_| "Beginner".to_string()),
        rule("intermediate", r"\bمتوسط\b", |_| "Intermediate".to_string()),
        rule("advanced", r"\bمتقدم\b", |_| "Advanced".to_string()),
    ])
});

/// Arabic hour count with number agreement.
fn arabic_hours(count: u64) -> String {
    match count {
        1 => "ساعة واحدة".to_string(),
        2 => "ساعتان".to_string(),
        3..=10 => format!("{count} ساعات"),
        _ => format!("{count} ساعة"),
    }
}

/// English hour count.
fn english_hours(count: u64) -> String {
    if count == 1 { "1 hour".to_string() } else { format!("{count} hours") }
}

/// Parses ASCII, Arabic-Indic and Extended Arabic-Indic digits.
fn parse_number(digits: &str) -> Option<u64> {
    digits.chars().try_fold(0_u64, |acc, c| {
        let digit = match c {
            '0'..='9' => c.to_digit(10),
            '\u{0660}'..='\u{0669}' => Some(u32::from(c) - 0x0660),
            '\u{06F0}'..='\u{06F9}' => Some(u32::from(c) - 0x06F0),
            _ => None,
        }?;
        acc.checked_mul(10)?.checked_add(u64::from(digit))
    })
}

/// Applies `build` to the number in group 1, or keeps the match unchanged.
fn with_number(caps: &Captures<'_>, build: impl Fn(u64) -> String) -> String {
    caps.get(1).and_then(|m| parse_number(m.as_str())).map_or_else(
        || caps.get(0).map_or_else(String::new, |m| m.as_str().to_string()),
        build,
    )
}

/// Ordered rules for one direction.
fn rules_for(target: LanguageCode) -> &'static [TokenRule] {
    match target {
        LanguageCode::Ar => &TO_ARABIC,
        LanguageCode::En => &TO_ENGLISH,
    }
}

/// Rewrites recognized sub-phrases of `text` into `target`.
///
/// Returns `Cow::Borrowed` when no rule matched.
#[must_use]
pub fn rewrite_tokens(text: &str, target: LanguageCode) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(text);
    for rule in rules_for(target) {
        if !rule.pattern.is_match(&current) {
            continue;
        }
        let replaced = rule.pattern.replace_all(&current, |caps: &Captures<'_>| (rule.rewrite)(caps));
        if replaced != current {
            tracing::trace!(rule = rule.name, %target, "Token rule applied");
            current = Cow::Owned(replaced.into_owned());
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Level 3", "المستوى 3")]
    #[case("Course Level 7 - Advanced", "Course المستوى 7 - متقدم")]
    #[case("1 hour", "ساعة واحدة")]
    #[case("2 hours", "ساعتان")]
    #[case("5 hours", "5 ساعات")]
    #[case("10 hours", "10 ساعات")]
    #[case("12 hours", "12 ساعة")]
    #[case("3 Hours", "3 ساعات")]
    #[case("Beginner", "مبتدئ")]
    #[case("Intermediate level", "متوسط level")]
    fn rewrites_towards_arabic(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite_tokens(input, LanguageCode::Ar), expected);
    }

    #[rstest]
    #[case("المستوى 3", "Level 3")]
    #[case("المستوى ٤", "Level 4")]
    #[case("ساعة واحدة", "1 hour")]
    #[case("ساعتان", "2 hours")]
    #[case("5 ساعات", "5 hours")]
    #[case("١٢ ساعة", "12 hours")]
    #[case("مبتدئ", "Beginner")]
    #[case("متقدم", "Advanced")]
    fn rewrites_towards_english(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite_tokens(input, LanguageCode::En), expected);
    }

    #[test]
    fn singular_and_plural_hours_differ() {
        let two = rewrite_tokens("2 hours", LanguageCode::Ar);
        let five = rewrite_tokens("5 hours", LanguageCode::Ar);

        assert_ne!(two, five);
        assert!(!two.contains('2'));
        assert!(five.starts_with('5'));
    }

    #[rstest]
    #[case("1 hour")]
    #[case("2 hours")]
    #[case("7 hours")]
    #[case("Level 2 - Beginner")]
    fn round_trip_restores_english(#[case] input: &str) {
        let arabic = rewrite_tokens(input, LanguageCode::Ar).into_owned();
        assert_eq!(rewrite_tokens(&arabic, LanguageCode::En), input);
    }

    #[rstest]
    #[case("Level 3", LanguageCode::Ar)]
    #[case("5 ساعات", LanguageCode::En)]
    fn rewriting_twice_is_stable(#[case] input: &str, #[case] target: LanguageCode) {
        let once = rewrite_tokens(input, target).into_owned();
        assert_eq!(rewrite_tokens(&once, target), once);
    }

    #[test]
    fn unmatched_text_is_borrowed() {
        let text = "Computer Science";
        assert!(matches!(rewrite_tokens(text, LanguageCode::Ar), Cow::Borrowed(_)));
        assert!(matches!(rewrite_tokens("", LanguageCode::En), Cow::Borrowed(_)));
    }

    #[test]
    fn parse_number_handles_digit_scripts() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("٤٢"), Some(42));
        assert_eq!(parse_number("۴۲"), Some(42));
        assert_eq!(parse_number("99999999999999999999999"), None);
    }
}
