//! Candidate-query expansion.
//!
//! Given a structured intent, this module generates the alternate query
//! strings that are submitted independently to the search collaborators:
//! the original text, the canonical theme, a "{recency} {theme}" combination,
//! the set number, and each keyword on its own.
//!
//! The output contains no blank strings and no exact duplicates; the first
//! occurrence of a string decides its position. A wholly blank query yields
//! an empty candidate list, which callers treat as "no results", not as an
//! error.
//!
//! # Examples
//!
//! ```
//! use brickseek::analysis::QueryAnalyzer;
//! use brickseek::expand::expand;
//!
//! let analyzer = QueryAnalyzer::new();
//! let intent = analyzer.analyze("oldest star wars sets");
//! let candidates = expand(&intent);
//!
//! assert_eq!(
//!     candidates,
//!     vec!["oldest star wars sets", "star wars", "oldest star wars", "oldest", "star", "wars"]
//! );
//! ```

use ahash::AHashSet;
use tracing::debug;

use crate::analysis::intent::QueryIntent;

/// Generate the deduplicated, ordered candidate query list for an intent.
pub fn expand(intent: &QueryIntent) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    // Original query first: it is always the most faithful candidate.
    candidates.push(intent.original_query.trim().to_string());

    if let Some(theme) = &intent.theme {
        candidates.push(theme.clone());
        if let Some(recency) = intent.recency {
            candidates.push(format!("{recency} {theme}"));
        }
    }

    if let Some(set_number) = &intent.set_number {
        candidates.push(set_number.clone());
    }

    for keyword in &intent.keywords {
        candidates.push(keyword.clone());
    }

    let mut seen: AHashSet<String> = AHashSet::new();
    let candidates: Vec<String> = candidates
        .into_iter()
        .map(|candidate| candidate.trim().to_string())
        .filter(|candidate| !candidate.is_empty() && seen.insert(candidate.clone()))
        .collect();

    debug!(?candidates, "expanded candidate queries");
    candidates
}
