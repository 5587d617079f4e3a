// src/domain/slug.rs
//! Slug generation for catalog display names.
//!
//! A slug keeps Hebrew letters as-is (Hebrew has no case), lowercases Latin
//! text and joins words with single hyphens. Retained characters are listed
//! explicitly instead of leaning on `\w`, whose meaning differs between
//! regex engines:
//!
//! * ASCII `a-z`, `0-9` and `_`
//! * the Hebrew block, U+0590..=U+05FF
//! * `-` as an internal separator
//!
//! Accented Latin letters are not retained, so `"Café"` becomes `"caf"`.
//! Geresh (U+05F3) and gershayim (U+05F4) count as quote marks even though
//! they sit in the Hebrew block, so `"ג׳ריס"` becomes `"גריס"`. Neither is a
//! slug character.

use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const HEBREW_BLOCK: std::ops::RangeInclusive<char> = '\u{0590}'..='\u{05FF}';
const GERESH: char = '\u{05F3}';
const GERSHAYIM: char = '\u{05F4}';

// Straight, curly and Hebrew (geresh / gershayim) quote marks.
static QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"\x{2018}\x{2019}\x{201C}\x{201D}\x{05F3}\x{05F4}]"#).unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_\x{0590}-\x{05FF}-]").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Derives a URL-safe slug from a display name.
///
/// Never fails. The result is empty when the input holds nothing worth
/// keeping (blank, or only symbols); callers pick their own fallback.
///
/// ```
/// use greengrocer::domain::slug::generate_slug;
///
/// assert_eq!(generate_slug("Mother's & Baby"), "mothers-and-baby");
/// assert_eq!(generate_slug("ג'ריס"), "גריס");
/// ```
pub fn generate_slug(display_name: &str) -> String {
    let lowered = display_name.trim().to_lowercase();
    let unquoted = QUOTES.replace_all(&lowered, "");
    let with_and = unquoted.replace('&', "-and-");
    let hyphenated = WHITESPACE.replace_all(&with_and, "-");
    let filtered = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&filtered, "-");

    let slug = collapsed.as_ref();
    let slug = slug.strip_prefix('-').unwrap_or(slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase()
        || ch.is_ascii_digit()
        || ch == '_'
        || ch == '-'
        || (HEBREW_BLOCK.contains(&ch) && ch != GERESH && ch != GERSHAYIM)
}

/// Returns `true` when `value` is a non-empty, well-formed slug.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(is_slug_char)
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
}

/// A stored routing key. Holding one means the string passed [`is_valid_slug`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` contains unsupported characters or separators"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "Apple  Red!!",
        "Mother's & Baby",
        "ג'ריס",
        "ג׳ריס",
        "--Leading/Trailing--",
        "Café (Fresh)",
        "תפוח עץ Pink Lady",
        "  עגבניות   שרי  ",
        "&&&",
        "“Quoted” ‘words’",
        "a\t\nb",
        "snake_case stays",
        "- - -",
        "İstanbul ÅSTRÖM",
        "100% טבעי!",
        "גבינה 5% (250 גרם)",
    ];

    #[test]
    fn literal_scenarios() {
        assert_eq!(generate_slug("Apple  Red!!"), "apple-red");
        assert_eq!(generate_slug("Mother's & Baby"), "mothers-and-baby");
        assert_eq!(generate_slug("ג'ריס"), "גריס");
        assert_eq!(generate_slug("   "), "");
        assert_eq!(generate_slug("--Leading/Trailing--"), "leadingtrailing");
        assert_eq!(generate_slug("Café (Fresh)"), "caf-fresh");
    }

    #[test]
    fn hebrew_text_is_kept_and_mixed_with_latin() {
        assert_eq!(generate_slug("תפוח עץ Pink Lady"), "תפוח-עץ-pink-lady");
        assert_eq!(generate_slug("  עגבניות   שרי  "), "עגבניות-שרי");
        assert_eq!(generate_slug("ג׳ריס"), "גריס");
        assert_eq!(generate_slug("גבינה 5% (250 גרם)"), "גבינה-5-250-גרם");
    }

    #[test]
    fn quotes_are_removed_without_a_separator() {
        assert_eq!(generate_slug("“Quoted” ‘words’"), "quoted-words");
        assert_eq!(generate_slug("Rock'n'Roll"), "rocknroll");
    }

    #[test]
    fn ampersands_become_and() {
        assert_eq!(generate_slug("Fruit&Veg"), "fruit-and-veg");
        assert_eq!(generate_slug("&&&"), "and-and-and");
        assert_eq!(generate_slug("& starts"), "and-starts");
    }

    #[test]
    fn symbol_only_input_yields_empty_slug() {
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug("- - -"), "");
        assert_eq!(generate_slug("(•‿•)"), "");
    }

    #[test]
    fn underscores_survive() {
        assert_eq!(generate_slug("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn output_only_contains_retained_characters() {
        for input in SAMPLES {
            let slug = generate_slug(input);
            assert!(
                slug.chars().all(is_slug_char),
                "unexpected character in {slug:?} (from {input:?})"
            );
        }
    }

    #[test]
    fn non_empty_output_is_well_formed() {
        for input in SAMPLES {
            let slug = generate_slug(input);
            if slug.is_empty() {
                continue;
            }
            assert!(is_valid_slug(&slug), "{slug:?} (from {input:?})");
        }
    }

    #[test]
    fn generated_slug_is_a_fixed_point() {
        for input in SAMPLES {
            let once = generate_slug(input);
            assert_eq!(generate_slug(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn valid_slugs_are_fixed_points() {
        let candidates = [
            "apple-red",
            "גריס",
            "snake_case",
            "a\u{05F3}b",
            "\u{05D2}\u{05F3}\u{05E8}\u{05D9}\u{05E1}",
            "\u{05E6}\u{05D4}\u{05F4}\u{05DC}",
            "\u{05D0}\u{05B8}\u{05D1}",
        ];
        for value in candidates {
            if is_valid_slug(value) {
                assert_eq!(generate_slug(value), value, "{value:?}");
            }
        }
        assert!(!is_valid_slug("a\u{05F3}b"));
        assert!(!is_valid_slug("\u{05E6}\u{05D4}\u{05F4}\u{05DC}"));
        assert!(Slug::new("a\u{05F3}b").is_err());
    }

    #[test]
    fn validity_predicate_rejects_malformed_values() {
        assert!(is_valid_slug("apple-red"));
        assert!(is_valid_slug("גריס"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-apple"));
        assert!(!is_valid_slug("apple-"));
        assert!(!is_valid_slug("apple--red"));
        assert!(!is_valid_slug("Apple"));
        assert!(!is_valid_slug("apple red"));
        assert!(!is_valid_slug("café"));
    }

    #[test]
    fn slug_value_object_enforces_invariants() {
        assert_eq!(Slug::new("fresh-herbs").unwrap().as_str(), "fresh-herbs");
        assert!(matches!(Slug::new(""), Err(DomainError::Validation(_))));
        assert!(matches!(
            Slug::new("Fresh Herbs"),
            Err(DomainError::Validation(_))
        ));
    }
}
