//! Controlled vocabulary for query normalization.
//!
//! This module provides the four alias tables the query analyzer matches
//! against: themes, recency, size, and price. Each table maps a canonical
//! concept to a set of textual aliases (common phrasings, abbreviations, and
//! misspellings) that are matched by case-insensitive containment.
//!
//! A [`Vocabulary`] is an immutable configuration value, constructed once at
//! startup and shared by reference. Table iteration order is deterministic
//! (insertion order), which makes first-match-wins extraction reproducible.
//!
//! # Examples
//!
//! ```
//! use brickseek::vocabulary::{Recency, Vocabulary};
//!
//! let vocabulary = Vocabulary::new();
//! assert_eq!(vocabulary.theme_for("cheap starwars stuff"), Some("star wars"));
//! assert_eq!(vocabulary.recency_for("the earliest sets"), Some(Recency::Oldest));
//! ```

pub mod tables;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical recency concepts.
///
/// Only these two are operative in ranking; the "vintage"/"modern"
/// near-synonyms are folded into them as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recency {
    Oldest,
    Newest,
}

impl fmt::Display for Recency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recency::Oldest => write!(f, "oldest"),
            Recency::Newest => write!(f, "newest"),
        }
    }
}

/// Canonical size concepts. `Medium` is recognized but carries no ranking
/// bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Largest,
    Smallest,
    Medium,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Largest => write!(f, "largest"),
            Size::Smallest => write!(f, "smallest"),
            Size::Medium => write!(f, "medium"),
        }
    }
}

/// Canonical price concepts. `Free` is recognized but carries no ranking
/// bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Price {
    Expensive,
    Cheap,
    Free,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Expensive => write!(f, "expensive"),
            Price::Cheap => write!(f, "cheap"),
            Price::Free => write!(f, "free"),
        }
    }
}

/// The immutable alias tables used by the query analyzer.
///
/// Entries are stored as ordered vectors, not hash maps, so extraction walks
/// the tables in a fixed order and "first match wins" is deterministic.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    themes: Vec<(String, Vec<String>)>,
    recency: Vec<(Recency, Vec<String>)>,
    sizes: Vec<(Size, Vec<String>)>,
    prices: Vec<(Price, Vec<String>)>,
}

impl Vocabulary {
    /// Create a vocabulary seeded with the default tables.
    pub fn new() -> Self {
        Vocabulary {
            themes: tables::DEFAULT_THEMES
                .iter()
                .map(|(theme, aliases)| {
                    (
                        theme.to_string(),
                        aliases.iter().map(|a| a.to_string()).collect(),
                    )
                })
                .collect(),
            recency: tables::DEFAULT_RECENCY
                .iter()
                .map(|(concept, aliases)| {
                    (*concept, aliases.iter().map(|a| a.to_string()).collect())
                })
                .collect(),
            sizes: tables::DEFAULT_SIZES
                .iter()
                .map(|(concept, aliases)| {
                    (*concept, aliases.iter().map(|a| a.to_string()).collect())
                })
                .collect(),
            prices: tables::DEFAULT_PRICES
                .iter()
                .map(|(concept, aliases)| {
                    (*concept, aliases.iter().map(|a| a.to_string()).collect())
                })
                .collect(),
        }
    }

    /// The canonical theme whose alias first occurs as a substring of
    /// `text_lower`, if any. `text_lower` must already be lower-cased.
    pub fn theme_for(&self, text_lower: &str) -> Option<&str> {
        for (theme, aliases) in &self.themes {
            if aliases.iter().any(|alias| text_lower.contains(alias)) {
                return Some(theme);
            }
        }
        None
    }

    /// Iterate over the canonical theme names in table order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|(theme, _)| theme.as_str())
    }

    /// The recency concept whose alias first occurs as a substring of
    /// `text_lower`, if any.
    pub fn recency_for(&self, text_lower: &str) -> Option<Recency> {
        for (concept, aliases) in &self.recency {
            if aliases.iter().any(|alias| text_lower.contains(alias)) {
                return Some(*concept);
            }
        }
        None
    }

    /// The size concept whose alias first occurs as a substring of
    /// `text_lower`, if any.
    pub fn size_for(&self, text_lower: &str) -> Option<Size> {
        for (concept, aliases) in &self.sizes {
            if aliases.iter().any(|alias| text_lower.contains(alias)) {
                return Some(*concept);
            }
        }
        None
    }

    /// The price concept whose alias first occurs as a substring of
    /// `text_lower`, if any.
    pub fn price_for(&self, text_lower: &str) -> Option<Price> {
        for (concept, aliases) in &self.prices {
            if aliases.iter().any(|alias| text_lower.contains(alias)) {
                return Some(*concept);
            }
        }
        None
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
