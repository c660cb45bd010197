//! Keyword tokenization and the stop-word list.

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

/// Tokens at or below this length are discarded as keywords.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Words that never survive as keywords: articles, conjunctions, common
/// prepositions, and the domain fillers that appear in nearly every query.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "set", "sets", "lego",
];

/// The stop words as a set for O(1) membership checks.
static STOP_WORD_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Check if a word is a stop word. Expects lower-cased input.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Extract the meaningful keywords from a query.
///
/// The query is lower-cased and split into alphanumeric tokens; tokens of
/// length <= 2 and stop words are dropped. First-seen order is preserved and
/// duplicates are kept — deduplication happens later, in query expansion.
///
/// Purely numeric tokens are keywords like any other: a set number such as
/// "75192" passes the length and stop-word checks, so it is retained.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN && !is_stop_word(token))
        .map(|token| token.to_string())
        .collect()
}
