//! The spelling engine: loaded dictionary plus the operations served on it.
//!
//! A [`SpellingEngine`] is built once at startup and is read-only afterwards,
//! so it can be shared between threads behind an `Arc` without locking.

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};
use crate::spelling::ranker::{Candidate, CandidateRanker};

/// Ranked suggestions for a misspelled word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub input: String,
    pub suggestions: Vec<String>,
}

/// Single best correction for a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResponse {
    pub input: String,
    pub suggestions: String,
}

/// Completions for a prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub prefix: String,
    pub completions: Vec<String>,
}

/// Dictionary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStats {
    pub dictionary_words: usize,
    pub dictionary_total_frequency: u64,
    pub max_candidates: usize,
    pub parallel: bool,
}

/// Immutable spelling context: dictionary, ranker and limits.
#[derive(Debug, Clone)]
pub struct SpellingEngine {
    dictionary: Arc<SpellingDictionary>,
    ranker: CandidateRanker,
    config: EngineConfig,
}

impl SpellingEngine {
    /// Create an engine over an already loaded dictionary.
    ///
    /// The ranking thread pool is only built when the dictionary is large
    /// enough to be scanned in parallel.
    pub fn new(dictionary: SpellingDictionary, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let ranker = if config.parallel && dictionary.word_count() >= config.parallel_threshold {
            CandidateRanker::from_config(&config)?
        } else {
            debug!(
                "{} words is below the parallel threshold, ranking sequentially",
                dictionary.word_count()
            );
            CandidateRanker::new(config.max_candidates)
        };
        Ok(SpellingEngine {
            dictionary: Arc::new(dictionary),
            ranker,
            config,
        })
    }

    /// Build an engine from configuration, loading the configured dictionary.
    ///
    /// Falls back to the built-in English dictionary when none is configured.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let dictionary = match &config.dictionary {
            Some(path) => SpellingDictionary::load(path, config.counts.as_deref())?,
            None => {
                info!("No dictionary configured, using the built-in English dictionary");
                BuiltinDictionary::english()
            }
        };
        Self::new(dictionary, config)
    }

    /// The loaded dictionary.
    pub fn dictionary(&self) -> &SpellingDictionary {
        &self.dictionary
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Up to `max_candidates` vocabulary words ranked for `word`, best first.
    pub fn rank_candidates(&self, word: &str) -> Vec<String> {
        self.ranker.rank_candidates(word, &self.dictionary)
    }

    /// Ranked candidates with scores and distances.
    pub fn rank(&self, word: &str) -> Vec<Candidate> {
        self.ranker.rank(word, &self.dictionary)
    }

    /// Most frequent known word within two edits of `word`.
    pub fn correct(&self, word: &str) -> String {
        SpellingCorrector::new(&self.dictionary).correct(word)
    }

    /// Up to `max_completions` words starting with `prefix`, most frequent first.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.dictionary.completions(prefix, self.config.max_completions)
    }

    /// Response body for a ranked suggestion request.
    pub fn suggestions(&self, word: &str) -> SuggestionResponse {
        SuggestionResponse {
            input: word.to_string(),
            suggestions: self.rank_candidates(word),
        }
    }

    /// Response body for a correction request.
    pub fn correction(&self, word: &str) -> CorrectionResponse {
        CorrectionResponse {
            input: word.to_string(),
            suggestions: self.correct(word),
        }
    }

    /// Response body for a completion request.
    pub fn completions(&self, prefix: &str) -> CompletionResponse {
        CompletionResponse {
            prefix: prefix.to_string(),
            completions: self.complete(prefix),
        }
    }

    /// Get statistics about the engine.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            dictionary_words: self.dictionary.word_count(),
            dictionary_total_frequency: self.dictionary.total_frequency(),
            max_candidates: self.ranker.max_candidates(),
            parallel: self.ranker.is_parallel_for(self.dictionary.word_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SpellingEngine {
        SpellingEngine::new(BuiltinDictionary::english(), EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_rank_candidates() {
        let engine = engine();
        let suggestions = engine.rank_candidates("teh");
        assert_eq!(suggestions.len(), 5);
        assert!(suggestions.contains(&"the".to_string()));
    }

    #[test]
    fn test_rank_candidates_respects_config() {
        let config = EngineConfig {
            max_candidates: 2,
            ..Default::default()
        };
        let engine = SpellingEngine::new(BuiltinDictionary::english(), config).unwrap();
        assert_eq!(engine.rank_candidates("wrold").len(), 2);
        assert_eq!(engine.rank("wrold").len(), 2);
    }

    #[test]
    fn test_correct_and_complete() {
        let engine = engine();
        assert_eq!(engine.correct("wrold"), "world");
        assert_eq!(engine.complete("th")[0], "the");
        assert!(engine.complete("th").len() <= 5);
    }

    #[test]
    fn test_response_bodies() {
        let engine = engine();

        let response = engine.suggestions("helo");
        assert_eq!(response.input, "helo");
        assert_eq!(response.suggestions, engine.rank_candidates("helo"));

        let json = serde_json::to_value(engine.correction("helo")).unwrap();
        assert_eq!(json["input"], "helo");
        assert_eq!(json["suggestions"], "hello");

        let json = serde_json::to_value(engine.completions("wor")).unwrap();
        assert_eq!(json["prefix"], "wor");
        assert_eq!(json["completions"][0], "world");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            max_candidates: 0,
            ..Default::default()
        };
        assert!(SpellingEngine::new(SpellingDictionary::new(), config).is_err());
    }

    #[test]
    fn test_empty_dictionary() {
        let engine =
            SpellingEngine::new(SpellingDictionary::new(), EngineConfig::default()).unwrap();
        assert!(engine.rank_candidates("word").is_empty());
        assert!(engine.complete("w").is_empty());
        assert_eq!(engine.correct("word"), "word");
    }

    #[test]
    fn test_stats() {
        let engine = engine();
        let stats = engine.stats();
        assert_eq!(stats.dictionary_words, engine.dictionary().word_count());
        assert_eq!(stats.max_candidates, 5);
        assert!(!stats.parallel); // below the default threshold
    }

    #[test]
    fn test_small_dictionary_has_no_thread_pool() {
        let engine = engine();
        assert!(!engine.ranker.is_parallel_for(usize::MAX));

        let config = EngineConfig {
            parallel_threshold: 1,
            thread_pool_size: Some(2),
            ..Default::default()
        };
        let engine = SpellingEngine::new(BuiltinDictionary::english(), config).unwrap();
        assert!(engine.ranker.is_parallel_for(engine.dictionary().word_count()));
        assert!(engine.stats().parallel);
        assert_eq!(engine.rank("wrold"), self::engine().rank("wrold"));

        let config = EngineConfig {
            parallel: false,
            parallel_threshold: 1,
            ..Default::default()
        };
        let engine = SpellingEngine::new(BuiltinDictionary::english(), config).unwrap();
        assert!(!engine.ranker.is_parallel_for(usize::MAX));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpellingEngine>();
    }
}
