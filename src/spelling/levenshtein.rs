//! Keyboard-weighted Levenshtein distance.
//!
//! Insertions and deletions cost 1.0. Substituting one character for a
//! different one costs the distance between the two keys on a [`KeyLayout`],
//! so typos between neighbouring keys are cheaper than arbitrary
//! replacements. Costs accumulate as `f64` without rounding.

use crate::spelling::keyboard::KeyLayout;

/// Weighted edit distance between two strings on the QWERTY layout.
pub fn weighted_edit_distance(s1: &str, s2: &str) -> f64 {
    weighted_edit_distance_with(KeyLayout::qwerty(), s1, s2)
}

/// Weighted edit distance between two strings on the given layout.
pub fn weighted_edit_distance_with(layout: &KeyLayout, s1: &str, s2: &str) -> f64 {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    weighted_distance_chars(layout, &s1_chars, &s2_chars)
}

/// Two-row Wagner-Fischer over pre-split character slices.
#[allow(clippy::needless_range_loop)]
fn weighted_distance_chars(layout: &KeyLayout, s1: &[char], s2: &[char]) -> f64 {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2 as f64;
    }
    if len2 == 0 {
        return len1 as f64;
    }

    let mut prev_row: Vec<f64> = (0..=len2).map(|j| j as f64).collect();
    let mut curr_row = vec![0.0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i as f64;
        let ch1 = s1[i - 1];

        for j in 1..=len2 {
            let ch2 = s2[j - 1];
            let substitution_cost = if ch1 == ch2 {
                0.0
            } else {
                layout.key_distance(ch1, ch2)
            };

            curr_row[j] = (prev_row[j] + 1.0) // deletion
                .min(curr_row[j - 1] + 1.0) // insertion
                .min(prev_row[j - 1] + substitution_cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Computes distances from one fixed query to many candidates.
///
/// The query is split into characters once instead of on every comparison.
#[derive(Debug, Clone)]
pub struct WeightedMatcher<'a> {
    layout: &'a KeyLayout,
    query: String,
    query_chars: Vec<char>,
}

impl<'a> WeightedMatcher<'a> {
    /// Create a new matcher for the given query string.
    pub fn new(layout: &'a KeyLayout, query: &str) -> Self {
        WeightedMatcher {
            layout,
            query: query.to_string(),
            query_chars: query.chars().collect(),
        }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Weighted distance from the query to a candidate.
    pub fn distance(&self, candidate: &str) -> f64 {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        weighted_distance_chars(self.layout, &self.query_chars, &candidate_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::keyboard::{UNKNOWN_KEY_PENALTY, key_distance};

    #[test]
    fn test_identity() {
        for word in ["", "a", "cat", "search", "ca9", "Hello", "naïve"] {
            assert_eq!(weighted_edit_distance(word, word), 0.0);
        }
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(weighted_edit_distance("", ""), 0.0);
        assert_eq!(weighted_edit_distance("", "abc"), 3.0);
        assert_eq!(weighted_edit_distance("abcd", ""), 4.0);
    }

    #[test]
    fn test_adjacent_substitution() {
        // c and v are neighbours on the bottom row
        let distance = weighted_edit_distance("cat", "vat");
        assert!((distance - key_distance('c', 'v')).abs() < 1e-9);
        assert!((distance - 1.0).abs() < 1e-9);

        // q and s are diagonal neighbours
        let distance = weighted_edit_distance("qa", "sa");
        assert!((distance - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_distant_substitution_capped_by_delete_insert() {
        // t -> p is five keys apart, deleting and inserting is cheaper
        assert!(key_distance('t', 'p') > 2.0);
        assert!((weighted_edit_distance("cat", "cap") - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_character_penalty() {
        let distance = weighted_edit_distance("cat", "ca9");
        assert_eq!(key_distance('t', '9'), UNKNOWN_KEY_PENALTY);
        assert!((distance - UNKNOWN_KEY_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_insertions_and_deletions() {
        assert!((weighted_edit_distance("helo", "hello") - 1.0).abs() < 1e-9);
        assert!((weighted_edit_distance("hello", "helo") - 1.0).abs() < 1e-9);
        assert!((weighted_edit_distance("search", "searching") - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_upper_bound() {
        let pairs = [
            ("kitten", "sitting"),
            ("search", "serach"),
            ("abc", "xyz"),
            ("", "word"),
            ("12345", "abc"),
            ("qwerty", "mnbvcx"),
        ];
        for (a, b) in pairs {
            let distance = weighted_edit_distance(a, b);
            let bound = (a.chars().count() + b.chars().count()) as f64;
            assert!(distance >= 0.0);
            assert!(
                distance <= bound,
                "distance({a}, {b}) = {distance} exceeds {bound}"
            );
        }
    }

    #[test]
    fn test_nearby_cheaper_than_distant() {
        let nearby = weighted_edit_distance("search", "searcg"); // h->g neighbours
        let distant = weighted_edit_distance("search", "searcp"); // h->p far apart
        assert!(nearby < distant);
    }

    #[test]
    fn test_matcher_agrees_with_function() {
        let layout = KeyLayout::qwerty();
        let matcher = WeightedMatcher::new(layout, "wrold");
        assert_eq!(matcher.query(), "wrold");
        for candidate in ["world", "would", "word", "", "wrold"] {
            assert_eq!(
                matcher.distance(candidate),
                weighted_edit_distance("wrold", candidate)
            );
        }
    }
}
