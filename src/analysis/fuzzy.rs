//! String-similarity kernels for fuzzy theme matching.
//!
//! Similarity is reported on a 0-100 scale, where 100 means identical and 0
//! means no similarity, matching the convention of the fuzzy-matching tools
//! this crate's scoring thresholds were calibrated against.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one string into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    levenshtein_distance_chars(&s1_chars, &s2_chars)
}

fn levenshtein_distance_chars(s1_chars: &[char], s2_chars: &[char]) -> usize {
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Two-row formulation for O(min) memory.
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Similarity of two whole strings on a 0-100 scale.
///
/// Defined as `(1 - distance / max_len) * 100`. Two empty strings are
/// considered identical (100).
pub fn ratio(s1: &str, s2: &str) -> f64 {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    ratio_chars(&s1_chars, &s2_chars)
}

fn ratio_chars(s1_chars: &[char], s2_chars: &[char]) -> f64 {
    let max_len = s1_chars.len().max(s2_chars.len());
    if max_len == 0 {
        return 100.0;
    }

    let distance = levenshtein_distance_chars(s1_chars, s2_chars);
    (1.0 - distance as f64 / max_len as f64) * 100.0
}

/// Best-window similarity of the shorter string against the longer one, on a
/// 0-100 scale.
///
/// The shorter string is compared against every window of its own length in
/// the longer string and the best [`ratio`] wins. This makes a short
/// canonical name score highly against a long query that merely contains a
/// close variant of it, which is what the theme fallback needs.
pub fn partial_ratio(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }
    if shorter.len() == longer.len() {
        return ratio_chars(shorter, longer);
    }

    let window = shorter.len();
    let mut best: f64 = 0.0;

    for start in 0..=(longer.len() - window) {
        let score = ratio_chars(shorter, &longer[start..start + window]);
        if score > best {
            best = score;
            // A perfect window cannot be beaten.
            if best >= 100.0 {
                break;
            }
        }
    }

    best
}
