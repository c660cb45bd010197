//! Combined search outcome.

use serde::{Deserialize, Serialize};

use crate::catalog::record::CatalogRecord;

/// The outcome of a full search request: the ranked records plus the optional
/// assistant response generated from them.
///
/// An empty `sets` list is the "no results" state, which presentation layers
/// must render distinctly from an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Ranked records, best match first.
    pub sets: Vec<CatalogRecord>,
    /// Prose generated by the response-generation collaborator, if one was
    /// configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_response: Option<String>,
}

impl SearchResult {
    /// Create a result with records only.
    pub fn from_sets(sets: Vec<CatalogRecord>) -> Self {
        SearchResult {
            sets,
            assistant_response: None,
        }
    }

    /// True if no records matched.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
