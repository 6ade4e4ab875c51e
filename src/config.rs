//! Engine configuration.
//!
//! Configuration is a plain serde struct with defaults for every field, so a
//! JSON config file only needs to name the values it changes.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KeyspellError, Result};

/// Configuration for a [`SpellingEngine`](crate::spelling::engine::SpellingEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of ranked candidates returned per word.
    pub max_candidates: usize,
    /// Maximum number of prefix completions returned.
    pub max_completions: usize,
    /// Whether large vocabularies are scanned in parallel.
    pub parallel: bool,
    /// Minimum vocabulary size before the scan goes parallel.
    pub parallel_threshold: usize,
    /// Ranking thread pool size (None = number of CPUs).
    pub thread_pool_size: Option<usize>,
    /// Dictionary file (frequency file, JSON vocabulary or `.bin` snapshot).
    pub dictionary: Option<PathBuf>,
    /// Word counts companion for a JSON vocabulary.
    pub counts: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_candidates: 5,
            max_completions: 5,
            parallel: true,
            parallel_threshold: 10_000,
            thread_pool_size: None,
            dictionary: None,
            counts: None,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: EngineConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(KeyspellError::config("max_candidates must be at least 1"));
        }
        if self.max_completions == 0 {
            return Err(KeyspellError::config("max_completions must be at least 1"));
        }
        if self.thread_pool_size == Some(0) {
            return Err(KeyspellError::config("thread_pool_size must be at least 1"));
        }
        if self.counts.is_some() && self.dictionary.is_none() {
            return Err(KeyspellError::config("counts file given without a dictionary"));
        }
        Ok(())
    }

    /// Effective ranking thread pool size.
    pub fn effective_thread_pool_size(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }
}
