//! # keyspell
//!
//! Keyboard-aware spelling suggestions for single words.
//!
//! ## Features
//!
//! - Weighted edit distance with QWERTY key distance as substitution cost
//! - Candidate ranking by distance and log word frequency
//! - Known-word correction within two edits
//! - Prefix completion by frequency
//! - Frequency file, JSON and binary snapshot dictionaries
//!
//! ## Example
//!
//! ```
//! use keyspell::config::EngineConfig;
//! use keyspell::spelling::{SpellingDictionary, SpellingEngine};
//!
//! let dictionary = SpellingDictionary::from_counts([("cat", 100), ("cap", 50), ("bat", 10)]);
//! let engine = SpellingEngine::new(dictionary, EngineConfig::default()).unwrap();
//!
//! assert_eq!(engine.rank_candidates("cat")[0], "cat");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::error::{KeyspellError, Result};
    pub use crate::spelling::{
        Candidate, CandidateRanker, KeyLayout, SpellingCorrector, SpellingDictionary,
        SpellingEngine, weighted_edit_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
