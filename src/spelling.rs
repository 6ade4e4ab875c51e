//! Spelling suggestions for single words.
//!
//! The core is a keyboard-aware weighted edit distance
//! ([`levenshtein`]) used by the [`ranker`] to score every vocabulary word by
//! closeness and frequency. The [`corrector`] and prefix completion in
//! [`dictionary`] offer cheaper alternatives over the same vocabulary, and
//! [`engine`] ties them together behind one immutable context.

pub mod corrector;
pub mod dictionary;
pub mod engine;
pub mod keyboard;
pub mod levenshtein;
pub mod ranker;

// Re-export commonly used types
pub use corrector::SpellingCorrector;
pub use dictionary::{BuiltinDictionary, SpellingDictionary};
pub use engine::{CompletionResponse, CorrectionResponse, SpellingEngine, SuggestionResponse};
pub use keyboard::{KeyLayout, UNKNOWN_KEY_PENALTY, key_distance};
pub use levenshtein::{WeightedMatcher, weighted_edit_distance};
pub use ranker::{Candidate, CandidateRanker};
