//! Candidate ranking by keyboard-weighted distance and word frequency.
//!
//! Every vocabulary word `v` is scored against the input as
//!
//! ```text
//! score(v) = -weighted_edit_distance(input, v) + ln(count(v) + 1)
//! ```
//!
//! and the best `max_candidates` words are returned, highest score first.
//! Equal scores are ordered by word ascending, which makes the output
//! independent of dictionary iteration order and of whether the scan ran on
//! one thread or many.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{KeyspellError, Result};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::keyboard::KeyLayout;
use crate::spelling::levenshtein::WeightedMatcher;

/// Default number of candidates returned per word.
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// A scored vocabulary word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The suggested word.
    pub word: String,
    /// Ranking score, higher is better.
    pub score: f64,
    /// Weighted edit distance from the input.
    pub distance: f64,
}

/// Score of a vocabulary word at `distance` from the input with `count` occurrences.
pub fn candidate_score(distance: f64, count: u64) -> f64 {
    -distance + (count as f64 + 1.0).ln()
}

/// Ranking order: score descending, then word ascending.
fn ranking_order(a: &(&str, f64, f64), b: &(&str, f64, f64)) -> Ordering {
    b.2.total_cmp(&a.2).then_with(|| a.0.cmp(b.0))
}

/// Ranks vocabulary words as corrections for an input word.
#[derive(Debug, Clone)]
pub struct CandidateRanker {
    layout: KeyLayout,
    max_candidates: usize,
    /// Vocabulary size at which the scan switches to the pool.
    parallel_threshold: usize,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl CandidateRanker {
    /// Create a sequential ranker on the QWERTY layout.
    pub fn new(max_candidates: usize) -> Self {
        Self::with_layout(KeyLayout::qwerty().clone(), max_candidates)
    }

    /// Create a sequential ranker on a custom layout.
    pub fn with_layout(layout: KeyLayout, max_candidates: usize) -> Self {
        CandidateRanker {
            layout,
            max_candidates,
            parallel_threshold: usize::MAX,
            thread_pool: None,
        }
    }

    /// Create a ranker from the engine configuration.
    ///
    /// A dedicated thread pool is built when parallel ranking is enabled.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let mut ranker = Self::new(config.max_candidates);
        if config.parallel {
            let thread_pool = ThreadPoolBuilder::new()
                .num_threads(config.effective_thread_pool_size())
                .thread_name(|i| format!("keyspell-rank-{i}"))
                .build()
                .map_err(|e| {
                    KeyspellError::internal(format!("Failed to create thread pool: {e}"))
                })?;
            ranker.thread_pool = Some(Arc::new(thread_pool));
            ranker.parallel_threshold = config.parallel_threshold;
        }
        Ok(ranker)
    }

    /// Maximum number of candidates returned.
    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Whether a vocabulary of `size` words would be scanned in parallel.
    pub fn is_parallel_for(&self, size: usize) -> bool {
        self.thread_pool.is_some() && size >= self.parallel_threshold
    }

    /// Top-ranked words for `word`, best first.
    pub fn rank_candidates(&self, word: &str, dictionary: &SpellingDictionary) -> Vec<String> {
        self.rank(word, dictionary)
            .into_iter()
            .map(|candidate| candidate.word)
            .collect()
    }

    /// Top-ranked candidates with their scores, best first.
    pub fn rank(&self, word: &str, dictionary: &SpellingDictionary) -> Vec<Candidate> {
        let start = Instant::now();
        let parallel = self.is_parallel_for(dictionary.word_count());

        let scored = match (&self.thread_pool, parallel) {
            (Some(pool), true) => self.score_parallel(pool, word, dictionary),
            _ => self.score_sequential(word, dictionary),
        };
        let candidates = self.select_top(scored);

        debug!(
            "Ranked {} words for {:?} in {:?} ({})",
            dictionary.word_count(),
            word,
            start.elapsed(),
            if parallel { "parallel" } else { "sequential" }
        );
        candidates
    }

    fn score_sequential<'d>(
        &self,
        word: &str,
        dictionary: &'d SpellingDictionary,
    ) -> Vec<(&'d str, f64, f64)> {
        let matcher = WeightedMatcher::new(&self.layout, word);
        dictionary
            .iter()
            .map(|(vocab_word, count)| {
                let distance = matcher.distance(vocab_word);
                (vocab_word, distance, candidate_score(distance, count))
            })
            .collect()
    }

    fn score_parallel<'d>(
        &self,
        pool: &ThreadPool,
        word: &str,
        dictionary: &'d SpellingDictionary,
    ) -> Vec<(&'d str, f64, f64)> {
        let matcher = WeightedMatcher::new(&self.layout, word);
        let entries: Vec<(&'d str, u64)> = dictionary.iter().collect();
        pool.install(|| {
            entries
                .par_iter()
                .map(|&(vocab_word, count)| {
                    let distance = matcher.distance(vocab_word);
                    (vocab_word, distance, candidate_score(distance, count))
                })
                .collect()
        })
    }

    /// Keep the best `max_candidates` entries in ranking order.
    fn select_top(&self, mut scored: Vec<(&str, f64, f64)>) -> Vec<Candidate> {
        let k = self.max_candidates.min(scored.len());
        if k == 0 {
            return Vec::new();
        }
        if k < scored.len() {
            scored.select_nth_unstable_by(k - 1, ranking_order);
            scored.truncate(k);
        }
        scored.sort_unstable_by(ranking_order);

        scored
            .into_iter()
            .map(|(word, distance, score)| Candidate {
                word: word.to_string(),
                score,
                distance,
            })
            .collect()
    }
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CANDIDATES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::BuiltinDictionary;
    use crate::spelling::keyboard::key_distance;
    use crate::spelling::levenshtein::weighted_edit_distance;

    fn animals() -> SpellingDictionary {
        SpellingDictionary::from_counts([("cat", 100), ("cap", 50), ("bat", 10)])
    }

    fn parallel_ranker(max_candidates: usize) -> CandidateRanker {
        let config = EngineConfig {
            max_candidates,
            parallel: true,
            parallel_threshold: 0,
            thread_pool_size: Some(4),
            ..Default::default()
        };
        CandidateRanker::from_config(&config).unwrap()
    }

    #[test]
    fn test_candidate_score() {
        assert!((candidate_score(0.0, 100) - 101f64.ln()).abs() < 1e-12);
        assert!((candidate_score(1.5, 0) + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_exact_match_ranks_first() {
        let ranker = CandidateRanker::default();
        let candidates = ranker.rank("cat", &animals());

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].word, "cat");
        assert_eq!(candidates[0].distance, 0.0);
        assert!((candidates[0].score - 101f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_scenario_order_follows_layout() {
        let dict = animals();
        let ranker = CandidateRanker::default();
        let candidates = ranker.rank("cat", &dict);

        // Substitution is capped by a deletion plus an insertion
        let cap_distance = key_distance('t', 'p').min(2.0);
        let bat_distance = key_distance('c', 'b').min(2.0);
        assert!((weighted_edit_distance("cat", "cap") - cap_distance).abs() < 1e-12);
        assert!((weighted_edit_distance("cat", "bat") - bat_distance).abs() < 1e-12);

        let cap_score = candidate_score(cap_distance, 50);
        let bat_score = candidate_score(bat_distance, 10);
        let expected_tail = if cap_score > bat_score {
            ["cap", "bat"]
        } else {
            ["bat", "cap"]
        };

        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["cat", expected_tail[0], expected_tail[1]]);
    }

    #[test]
    fn test_scores_are_descending() {
        let dict = BuiltinDictionary::english();
        let ranker = CandidateRanker::new(20);
        let candidates = ranker.rank("teh", &dict);

        assert_eq!(candidates.len(), 20);
        for pair in candidates.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_top_k_bound() {
        let dict = BuiltinDictionary::english();
        let ranker = CandidateRanker::default();
        assert_eq!(ranker.rank_candidates("wrold", &dict).len(), 5);

        let small = SpellingDictionary::from_counts([("one", 1), ("two", 2)]);
        assert_eq!(ranker.rank_candidates("wrold", &small).len(), 2);
    }

    #[test]
    fn test_empty_vocabulary() {
        let ranker = CandidateRanker::default();
        assert!(ranker.rank_candidates("anything", &SpellingDictionary::new()).is_empty());
    }

    #[test]
    fn test_empty_input_scores_by_length() {
        let dict = SpellingDictionary::from_counts([("a", 0), ("abc", 0), ("ab", 0)]);
        let ranker = CandidateRanker::default();
        let candidates = ranker.rank("", &dict);

        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["a", "ab", "abc"]);
        assert_eq!(candidates[2].distance, 3.0);
    }

    #[test]
    fn test_ties_broken_by_word() {
        // Same count and same distance from "zz"
        let dict = SpellingDictionary::from_counts([("qq", 7), ("mm", 7), ("pp", 7)]);
        let ranker = CandidateRanker::default();
        let first = ranker.rank_candidates("zz", &dict);

        let distances: Vec<f64> = first
            .iter()
            .map(|w| weighted_edit_distance("zz", w))
            .collect();
        assert!(distances.iter().all(|d| *d == distances[0]));
        assert_eq!(first, vec!["mm", "pp", "qq"]);
    }

    #[test]
    fn test_deterministic() {
        let dict = BuiltinDictionary::english();
        let ranker = CandidateRanker::default();
        let first = ranker.rank("hte", &dict);
        for _ in 0..5 {
            assert_eq!(ranker.rank("hte", &dict), first);
        }

        let rebuilt = SpellingDictionary::from_counts(
            dict.sorted_entries()
                .into_iter()
                .rev()
                .map(|(w, c)| (w.to_string(), c)),
        );
        assert_eq!(ranker.rank("hte", &rebuilt), first);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dict = BuiltinDictionary::english();
        let sequential = CandidateRanker::new(10);
        let parallel = parallel_ranker(10);
        assert!(parallel.is_parallel_for(dict.word_count()));
        assert!(!sequential.is_parallel_for(dict.word_count()));

        for word in ["teh", "wrold", "", "ca9", "helo", "PEOPLE", "zzzzzz"] {
            assert_eq!(parallel.rank(word, &dict), sequential.rank(word, &dict));
        }
    }

    #[test]
    fn test_parallel_threshold() {
        let config = EngineConfig {
            parallel_threshold: 1000,
            thread_pool_size: Some(2),
            ..Default::default()
        };
        let ranker = CandidateRanker::from_config(&config).unwrap();
        assert!(!ranker.is_parallel_for(999));
        assert!(ranker.is_parallel_for(1000));

        let config = EngineConfig {
            parallel: false,
            ..Default::default()
        };
        let ranker = CandidateRanker::from_config(&config).unwrap();
        assert!(!ranker.is_parallel_for(usize::MAX));
    }

    #[test]
    fn test_frequency_can_outweigh_distance() {
        // "the" is one deletion away from "thee" but far more common
        let dict = SpellingDictionary::from_counts([("the", 1_000_000), ("thee", 1)]);
        let ranker = CandidateRanker::default();
        assert_eq!(ranker.rank_candidates("thee", &dict)[0], "the");
    }
}
