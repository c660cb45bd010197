//! The query analyzer: per-field extraction of structured intent.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use crate::analysis::fuzzy::partial_ratio;
use crate::analysis::intent::QueryIntent;
use crate::analysis::keywords::extract_keywords;
use crate::vocabulary::Vocabulary;

/// Minimum partial-ratio score (0-100) for the fuzzy theme fallback to accept
/// a canonical theme. Which themes match is sensitive to this value; do not
/// retune without flagging the change.
pub const FUZZY_THEME_THRESHOLD: f64 = 70.0;

/// Matches 4-digit years 1900-2099.
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year pattern is valid"));

/// Matches contiguous runs of 3 to 6 digits, the shape of a set number.
static SET_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3,6}\b").expect("set number pattern is valid"));

/// Extracts structured intent from free-text queries.
///
/// Analysis is total: any input string, including the empty string, produces
/// an intent. Fields that cannot be extracted are absent, never errors. The
/// analyzer holds only the read-only [`Vocabulary`] and compiled patterns, so
/// it is safe to share across threads.
///
/// # Examples
///
/// ```
/// use brickseek::analysis::analyzer::QueryAnalyzer;
///
/// let analyzer = QueryAnalyzer::new();
/// let intent = analyzer.analyze("cheap star wars sets from 1999");
///
/// assert_eq!(intent.theme.as_deref(), Some("star wars"));
/// assert_eq!(intent.year, Some(1999));
/// assert_eq!(intent.set_number.as_deref(), Some("1999"));
/// ```
#[derive(Debug, Clone)]
pub struct QueryAnalyzer {
    vocabulary: Arc<Vocabulary>,
}

impl QueryAnalyzer {
    /// Create an analyzer with the default vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::new())
    }

    /// Create an analyzer with a custom vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        QueryAnalyzer {
            vocabulary: Arc::new(vocabulary),
        }
    }

    /// The vocabulary this analyzer matches against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Analyze a raw query into structured intent.
    ///
    /// Each field is extracted independently against the lower-cased input:
    /// theme (alias containment, then fuzzy fallback), recency/size/price
    /// (alias containment only), the first 4-digit year, the first 3-6 digit
    /// set number, and the keyword list. The year and set-number patterns
    /// overlap on purpose: a token like "2024" populates both fields.
    pub fn analyze(&self, text: &str) -> QueryIntent {
        let query_lower = text.to_lowercase();

        let intent = QueryIntent {
            original_query: text.to_string(),
            theme: self.extract_theme(&query_lower),
            recency: self.vocabulary.recency_for(&query_lower),
            size: self.vocabulary.size_for(&query_lower),
            price: self.vocabulary.price_for(&query_lower),
            year: extract_year(text),
            set_number: extract_set_number(text),
            keywords: extract_keywords(text),
        };

        debug!(
            query = text,
            theme = ?intent.theme,
            recency = ?intent.recency,
            size = ?intent.size,
            price = ?intent.price,
            year = ?intent.year,
            set_number = ?intent.set_number,
            keywords = ?intent.keywords,
            "analyzed query"
        );

        intent
    }

    /// Theme extraction: alias containment first, then a fuzzy fallback that
    /// compares the whole query against each canonical theme name and accepts
    /// the best score above [`FUZZY_THEME_THRESHOLD`].
    fn extract_theme(&self, query_lower: &str) -> Option<String> {
        if let Some(theme) = self.vocabulary.theme_for(query_lower) {
            debug!(theme, "theme matched by alias containment");
            return Some(theme.to_string());
        }

        let mut best: Option<(&str, f64)> = None;
        for theme in self.vocabulary.theme_names() {
            let score = partial_ratio(query_lower, theme);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((theme, score));
            }
        }

        match best {
            Some((theme, score)) if score > FUZZY_THEME_THRESHOLD => {
                debug!(theme, score, "theme matched by fuzzy fallback");
                Some(theme.to_string())
            }
            _ => None,
        }
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// The first 4-digit year (1900-2099) in the text, reading left to right.
fn extract_year(text: &str) -> Option<i32> {
    YEAR_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// The first 3-6 digit run in the text, kept as a string to preserve leading
/// zeros.
fn extract_set_number(text: &str) -> Option<String> {
    SET_NUMBER_PATTERN.find(text).map(|m| m.as_str().to_string())
}
