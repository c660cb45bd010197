//! The structured intent produced by query analysis.

use serde::{Deserialize, Serialize};

use crate::vocabulary::{Price, Recency, Size};

/// The decomposed, typed representation of a raw text query.
///
/// Produced once per query by
/// [`QueryAnalyzer::analyze`](crate::analysis::analyzer::QueryAnalyzer::analyze)
/// and never mutated afterwards. Every field except the original text and the
/// keyword list is optional; an absent field means "the query said nothing
/// about this".
///
/// A 4-digit year and a 3-6 digit set number are extracted independently and
/// may both be populated from the same token (e.g. "2024").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryIntent {
    /// The original query text, untouched.
    pub original_query: String,
    /// Matched canonical theme, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Matched recency modifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recency: Option<Recency>,
    /// Matched size modifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Matched price modifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// First 4-digit year found in the query, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// First 3-6 digit run found in the query, kept as a string to preserve
    /// leading zeros.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_number: Option<String>,
    /// Free keywords in first-seen order; duplicates are not removed here.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl QueryIntent {
    /// An intent with no extracted fields, carrying only the original text.
    pub fn empty<S: Into<String>>(original_query: S) -> Self {
        QueryIntent {
            original_query: original_query.into(),
            theme: None,
            recency: None,
            size: None,
            price: None,
            year: None,
            set_number: None,
            keywords: Vec::new(),
        }
    }

    /// True if no structured field was extracted and there are no keywords.
    pub fn is_unstructured(&self) -> bool {
        self.theme.is_none()
            && self.recency.is_none()
            && self.size.is_none()
            && self.price.is_none()
            && self.year.is_none()
            && self.set_number.is_none()
            && self.keywords.is_empty()
    }
}
