//! Result ranking.
//!
//! Scores candidate records against a structured intent with a fixed additive
//! rule set, then sorts by descending score. The sort is stable: records with
//! equal scores keep their input order. Ranking is a pure function; it never
//! fails, and an intent with no extracted fields leaves the input order
//! unchanged (all scores are zero).
//!
//! All weights and thresholds below are fixed policy constants, not values
//! derived from the data. Result ordering depends on their exact values; any
//! recalibration must be flagged.

use std::cmp::Reverse;

use crate::analysis::intent::QueryIntent;
use crate::catalog::record::CatalogRecord;
use crate::vocabulary::{Price, Recency, Size};

/// Points for the intent theme appearing in the record's theme label.
pub const THEME_MATCH_POINTS: i32 = 10;
/// Points for a release year on the matching side of the recency cutoffs.
pub const RECENCY_MATCH_POINTS: i32 = 5;
/// Points for a piece count on the matching side of the size cutoffs.
pub const SIZE_MATCH_POINTS: i32 = 3;
/// Points for a price on the matching side of the price cutoffs.
pub const PRICE_MATCH_POINTS: i32 = 3;
/// Points per keyword contained in the record name.
pub const NAME_KEYWORD_POINTS: i32 = 2;
/// Points per keyword contained in the record description.
pub const DESCRIPTION_KEYWORD_POINTS: i32 = 1;

/// "Oldest" matches release years strictly before this.
pub const OLDEST_YEAR_CUTOFF: i32 = 2000;
/// "Newest" matches release years strictly after this.
pub const NEWEST_YEAR_CUTOFF: i32 = 2010;
/// "Largest" matches piece counts strictly above this.
pub const LARGEST_PIECE_CUTOFF: u32 = 1000;
/// "Smallest" matches piece counts strictly below this.
pub const SMALLEST_PIECE_CUTOFF: u32 = 100;
/// "Expensive" matches prices strictly above this.
pub const EXPENSIVE_PRICE_CUTOFF: f64 = 100.0;
/// "Cheap" matches prices strictly below this.
pub const CHEAP_PRICE_CUTOFF: f64 = 50.0;

/// Score one record against an intent.
///
/// Signals are additive and not mutually exclusive: a record can match
/// several and accumulate all of their points.
pub fn score_record(record: &CatalogRecord, intent: &QueryIntent) -> i32 {
    let mut score = 0;

    if let Some(theme) = &intent.theme {
        if record.theme().to_lowercase().contains(&theme.to_lowercase()) {
            score += THEME_MATCH_POINTS;
        }
    }

    if let (Some(recency), Some(year)) = (intent.recency, record.release_year()) {
        let matched = match recency {
            Recency::Oldest => year < OLDEST_YEAR_CUTOFF,
            Recency::Newest => year > NEWEST_YEAR_CUTOFF,
        };
        if matched {
            score += RECENCY_MATCH_POINTS;
        }
    }

    if let Some(size) = intent.size {
        let matched = match size {
            Size::Largest => record.piece_count() > LARGEST_PIECE_CUTOFF,
            Size::Smallest => record.piece_count() < SMALLEST_PIECE_CUTOFF,
            Size::Medium => false,
        };
        if matched {
            score += SIZE_MATCH_POINTS;
        }
    }

    if let (Some(price_modifier), Some(price)) = (intent.price, record.price()) {
        let matched = match price_modifier {
            Price::Expensive => price > EXPENSIVE_PRICE_CUTOFF,
            Price::Cheap => price < CHEAP_PRICE_CUTOFF,
            Price::Free => false,
        };
        if matched {
            score += PRICE_MATCH_POINTS;
        }
    }

    let name_lower = record.name().to_lowercase();
    let description_lower = record.description().map(|d| d.to_lowercase());
    for keyword in &intent.keywords {
        let keyword_lower = keyword.to_lowercase();
        if name_lower.contains(&keyword_lower) {
            score += NAME_KEYWORD_POINTS;
        }
        if let Some(description) = &description_lower {
            if description.contains(&keyword_lower) {
                score += DESCRIPTION_KEYWORD_POINTS;
            }
        }
    }

    score
}

/// Sort records by descending relevance to the intent.
///
/// The output is a permutation of the input: nothing is added or dropped, and
/// ties keep their original relative order (stable sort).
pub fn rank(records: Vec<CatalogRecord>, intent: &QueryIntent) -> Vec<CatalogRecord> {
    let mut scored: Vec<(CatalogRecord, i32)> = records
        .into_iter()
        .map(|record| {
            let score = score_record(&record, intent);
            (record, score)
        })
        .collect();

    // Vec::sort_by_key is stable, which preserves input order on ties.
    scored.sort_by_key(|(_, score)| Reverse(*score));

    scored.into_iter().map(|(record, _)| record).collect()
}
