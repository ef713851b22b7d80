//! Word-level steps: separators, camel-case boundaries, spacing, casing.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_-]+").expect("valid separator regex"));
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel-case regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Replaces every run of `-` and `_` with a single space.
pub fn normalize_separators(s: &str) -> Cow<'_, str> {
    SEPARATOR_RUN.replace_all(s, " ")
}

/// Inserts a space between an ASCII lowercase letter and a following uppercase one.
///
/// `"GoogleAds"` becomes `"Google Ads"`; acronyms such as `"SQL"` are left alone.
pub fn split_camel_case(s: &str) -> Cow<'_, str> {
    CAMEL_BOUNDARY.replace_all(s, "${1} ${2}")
}

/// Trims both ends and collapses inner whitespace runs to one space.
pub fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(s.trim(), " ")
}

/// Uppercases the first character of each whitespace-delimited word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}
