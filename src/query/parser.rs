//! Rule-based parser turning free text into a [`ParsedQuery`].
//!
//! Rules run in a fixed order over the lowercased text: price bounds, rating
//! floor, category, then residual keyword extraction.

use super::ParsedQuery;
use crate::catalog::Category;
use regex_lite::Regex;
use std::sync::LazyLock;

/// Rating floor applied for "good reviews" style phrases.
pub const DEFAULT_MIN_RATING: f64 = 4.2;

/// Minimum length of a residual keyword.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Filler and structural words never kept as keywords.
pub const STOPWORDS: &[&str] = &[
    "show", "me", "with", "good", "reviews", "review", "find", "looking", "for", "please", "under",
    "over", "between", "less", "more", "than", "and", "to", "the", "a", "an", "rated", "rating",
    "category", "items", "products", "display", "highly",
];

mod patterns {
    use super::*;

    pub static UNDER: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?:under|below|less than)\s*\$?(\d+(?:\.\d+)?)").unwrap()
    });

    pub static OVER: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?:over|above|more than)\s*\$?(\d+(?:\.\d+)?)").unwrap()
    });

    pub static BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"between\s*\$?(\d+(?:\.\d+)?)\s*(?:and|to|-)\s*\$?(\d+(?:\.\d+)?)").unwrap()
    });

    pub static HIGH_RATING: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"good reviews|highly rated|4(?:\.\d+)?\+|rating\s*>=?\s*4").unwrap()
    });

    pub static EXPLICIT_RATING: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"rating\s*>=?\s*(\d(?:\.\d+)?)").unwrap());

    pub static NUMBER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\$?\d+(?:\.\d+)?").unwrap());

    pub static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
}

/// Parses a free-text query. Pure: the same text always yields the same result.
pub fn parse(text: &str) -> ParsedQuery {
    let query = normalize(text);

    let (price_min, price_max) = extract_price_bounds(&query);
    let min_rating = extract_min_rating(&query);
    let category = detect_category(&query);
    let keywords = extract_keywords(&query, category);

    ParsedQuery { keywords, category, price_min, price_max, min_rating }
}

/// Lowercases and folds every Unicode whitespace (NBSP, ideographic space)
/// to a plain space, since the patterns' `\s` is ASCII only.
fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Returns `(min, max)`. A "between" match replaces both bounds, including
/// with `None` when one of its numbers overflows.
fn extract_price_bounds(query: &str) -> (Option<f64>, Option<f64>) {
    let max = capture_number(&patterns::UNDER, query, 1);
    let min = capture_number(&patterns::OVER, query, 1);

    match patterns::BETWEEN.captures(query) {
        Some(caps) => (
            caps.get(1).and_then(|m| parse_number(m.as_str())),
            caps.get(2).and_then(|m| parse_number(m.as_str())),
        ),
        None => (min, max),
    }
}

/// An explicit "rating >= N" always wins over the phrase-based default.
fn extract_min_rating(query: &str) -> Option<f64> {
    let default = patterns::HIGH_RATING.is_match(query).then_some(DEFAULT_MIN_RATING);
    let explicit = capture_number(&patterns::EXPLICIT_RATING, query, 1);

    explicit.or(default)
}

/// First category (in priority order) with a synonym occurring anywhere in
/// the text. Matching is by substring, so "running" inside "outrunning" counts.
fn detect_category(query: &str) -> Option<Category> {
    Category::all()
        .iter()
        .copied()
        .find(|category| category.synonyms().iter().any(|word| query.contains(word)))
}

fn extract_keywords(query: &str, category: Option<Category>) -> Vec<String> {
    let without_numbers = patterns::NUMBER.replace_all(query, " ");
    let cleaned = patterns::PUNCTUATION.replace_all(&without_numbers, " ");

    cleaned
        .split_whitespace()
        .filter(|token| is_keyword_shaped(token))
        .filter(|token| !STOPWORDS.contains(token))
        .filter(|token| !category.is_some_and(|c| c.is_synonym(token)))
        .map(str::to_string)
        .collect()
}

fn is_keyword_shaped(token: &str) -> bool {
    token.len() >= MIN_KEYWORD_LEN && token.chars().all(|c| c.is_ascii_lowercase())
}

fn capture_number(re: &Regex, query: &str, group: usize) -> Option<f64> {
    re.captures(query).and_then(|caps| caps.get(group)).and_then(|m| parse_number(m.as_str()))
}

// Digit runs too long for f64 overflow to infinity; treat those as absent.
fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
