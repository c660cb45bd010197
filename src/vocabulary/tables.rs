//! Default vocabulary data.
//!
//! These tables are configuration data, not derived from any corpus. Entry
//! order is significant: extraction walks each table top to bottom and the
//! first concept with a matching alias wins.

use super::{Price, Recency, Size};

/// Common themes and their textual variations, including frequent
/// misspellings and abbreviations.
pub const DEFAULT_THEMES: &[(&str, &[&str])] = &[
    ("star wars", &["star wars", "starwars", "sw", "starwar"]),
    ("city", &["city", "lego city", "town"]),
    ("technic", &["technic", "technical"]),
    ("friends", &["friends", "lego friends"]),
    ("ninjago", &["ninjago", "ninja go", "ninja"]),
    ("architecture", &["architecture", "architectural"]),
    ("creator", &["creator", "creative"]),
    ("duplo", &["duplo", "duplo blocks"]),
    ("bionicle", &["bionicle", "bionicles"]),
    ("marvel", &["marvel", "superheroes", "avengers"]),
    ("dc", &["dc", "batman", "superman"]),
    ("harry potter", &["harry potter", "hp", "wizarding world"]),
    ("minecraft", &["minecraft", "mine craft"]),
    (
        "jurassic world",
        &["jurassic world", "jurassic park", "dinosaurs"],
    ),
    ("speed champions", &["speed champions", "cars", "racing"]),
    ("ideas", &["ideas", "lego ideas", "fan designed"]),
    ("expert", &["expert", "expert level", "adult"]),
    ("classic", &["classic", "basic", "traditional"]),
];

/// Recency concepts. "Vintage" and "modern" phrasings are folded in as
/// near-synonym aliases of oldest/newest.
pub const DEFAULT_RECENCY: &[(Recency, &[&str])] = &[
    (
        Recency::Oldest,
        &["oldest", "first", "earliest", "original", "vintage", "retro"],
    ),
    (
        Recency::Newest,
        &["newest", "latest", "recent", "current", "modern", "contemporary"],
    ),
];

/// Size concepts. `Medium` is recognized for completeness but never scored.
pub const DEFAULT_SIZES: &[(Size, &[&str])] = &[
    (Size::Largest, &["largest", "biggest", "huge", "massive"]),
    (Size::Smallest, &["smallest", "tiny", "mini", "small"]),
    (Size::Medium, &["medium", "average", "normal"]),
];

/// Price concepts. `Free` is recognized for completeness but never scored.
pub const DEFAULT_PRICES: &[(Price, &[&str])] = &[
    (
        Price::Expensive,
        &["expensive", "costly", "premium", "high price"],
    ),
    (
        Price::Cheap,
        &["cheap", "inexpensive", "affordable", "low price"],
    ),
    (Price::Free, &["free", "no cost", "zero price"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_are_lowercase() {
        let all = DEFAULT_THEMES
            .iter()
            .flat_map(|(_, aliases)| aliases.iter())
            .chain(DEFAULT_RECENCY.iter().flat_map(|(_, a)| a.iter()))
            .chain(DEFAULT_SIZES.iter().flat_map(|(_, a)| a.iter()))
            .chain(DEFAULT_PRICES.iter().flat_map(|(_, a)| a.iter()));

        for alias in all {
            assert_eq!(
                *alias,
                alias.to_lowercase(),
                "alias {alias:?} must be lowercase for containment matching"
            );
        }
    }

    #[test]
    fn test_every_theme_lists_itself() {
        for (theme, aliases) in DEFAULT_THEMES {
            assert!(
                aliases.contains(theme),
                "theme {theme:?} should appear in its own alias list"
            );
        }
    }
}
