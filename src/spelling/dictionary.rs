//! Vocabulary and word frequencies for spelling correction.
//!
//! A [`SpellingDictionary`] holds the known words together with their
//! occurrence counts. It is filled once at startup from one of the loaders
//! below and only read afterwards.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{KeyspellError, Result};

/// Format version written into dictionary snapshots.
const SNAPSHOT_VERSION: u32 = 1;

/// A dictionary that stores words and their frequencies.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    /// Words and their occurrence counts
    words: AHashMap<String, u64>,
    /// Sum of all counts, wide enough that it cannot overflow
    total_count: u128,
}

/// On-disk form of a dictionary snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct DictionarySnapshot {
    version: u32,
    entries: Vec<(String, u64)>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary {
            words: AHashMap::new(),
            total_count: 0,
        }
    }

    /// Build a dictionary from `(word, count)` pairs. Later duplicates win.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut dictionary = SpellingDictionary::new();
        for (word, count) in counts {
            dictionary.add_word(word, count);
        }
        dictionary
    }

    /// Add a word with the given count, replacing any previous count.
    ///
    /// Words are stored lowercased.
    pub fn add_word<S: Into<String>>(&mut self, word: S, count: u64) {
        let normalized = word.into().to_lowercase();
        let old_count = self.words.insert(normalized, count).unwrap_or(0);
        self.total_count = self.total_count - u128::from(old_count) + u128::from(count);
    }

    /// Increment the count of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        let normalized = word.to_lowercase();
        let current = self.words.get(&normalized).copied().unwrap_or(0);
        self.add_word(normalized, current.saturating_add(1));
    }

    /// Check if a word is in the vocabulary. The lookup is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Occurrence count of a word, 0 when unknown.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.words.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Get the number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the sum of all counts, saturating at `u64::MAX`.
    pub fn total_frequency(&self) -> u64 {
        u64::try_from(self.total_count).unwrap_or(u64::MAX)
    }

    /// All `(word, count)` pairs sorted by word.
    pub fn sorted_entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Words starting with `prefix`, most frequent first.
    ///
    /// The prefix is lowercased. Equal counts are ordered by word. An empty
    /// prefix matches every word.
    pub fn completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix_lower = prefix.to_lowercase();
        let mut matches: Vec<(&str, u64)> = self
            .iter()
            .filter(|(word, _)| word.starts_with(&prefix_lower))
            .collect();

        matches.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches
            .into_iter()
            .take(limit)
            .map(|(word, _)| word.to_string())
            .collect()
    }

    /// Get the most frequent words in the dictionary.
    pub fn most_frequent_words(&self, limit: usize) -> Vec<(String, u64)> {
        let mut word_freq: Vec<(&str, u64)> = self.iter().collect();
        word_freq.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        word_freq
            .into_iter()
            .take(limit)
            .map(|(word, freq)| (word.to_string(), freq))
            .collect()
    }

    /// Load a dictionary, picking the format from the file extension.
    ///
    /// `.bin` files are snapshots, `.json` files are a vocabulary array that
    /// needs a `counts` companion, anything else is a `word count` file.
    pub fn load<P: AsRef<Path>>(path: P, counts: Option<&Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => Self::load_snapshot(path),
            Some("json") => {
                let counts = counts.ok_or_else(|| {
                    KeyspellError::dictionary(format!(
                        "vocabulary '{}' needs a word counts file",
                        path.display()
                    ))
                })?;
                Self::load_from_json(path, counts)
            }
            _ => Self::load_from_frequency_file(path),
        }
    }

    /// Load from a text file with one word per line; counts are occurrences.
    pub fn load_from_word_list<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut dictionary = SpellingDictionary::new();
        let reader = BufReader::new(File::open(path)?);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                dictionary.increment_word(word);
            }
        }

        info!(
            "Loaded {} words from word list {}",
            dictionary.word_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Load from a frequency file with format "word count" per line.
    ///
    /// Lines without a numeric count are skipped. A word seen again, in any
    /// case, takes the count of its last line.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut dictionary = SpellingDictionary::new();
        let reader = BufReader::new(File::open(path)?);
        let mut skipped = 0usize;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            match parts.get(1).map(|count| count.parse::<u64>()) {
                Some(Ok(count)) => dictionary.add_word(parts[0], count),
                _ => {
                    warn!(
                        "Skipping malformed line {} in {}: {:?}",
                        line_num + 1,
                        path.display(),
                        line
                    );
                    skipped += 1;
                }
            }
        }

        info!(
            "Loaded {} words from {} ({} lines skipped)",
            dictionary.word_count(),
            path.display(),
            skipped
        );
        Ok(dictionary)
    }

    /// Load from a JSON vocabulary array and a JSON object of word counts.
    ///
    /// Both files must describe the same set of words, and no two words may
    /// differ only by case. Entries are added in vocabulary order.
    pub fn load_from_json<P: AsRef<Path>, Q: AsRef<Path>>(
        vocab_path: P,
        counts_path: Q,
    ) -> Result<Self> {
        let vocab: Vec<String> =
            serde_json::from_reader(BufReader::new(File::open(vocab_path.as_ref())?))?;
        let counts: AHashMap<String, u64> =
            serde_json::from_reader(BufReader::new(File::open(counts_path.as_ref())?))?;

        let vocab_set: AHashSet<&str> = vocab.iter().map(String::as_str).collect();
        if let Some(word) = counts
            .keys()
            .filter(|word| !vocab_set.contains(word.as_str()))
            .min()
        {
            return Err(KeyspellError::dictionary(format!(
                "count for '{word}' is not in the vocabulary"
            )));
        }

        let mut dictionary = SpellingDictionary::new();
        let mut seen: AHashMap<String, &str> = AHashMap::new();
        for word in &vocab {
            let count = *counts.get(word).ok_or_else(|| {
                KeyspellError::dictionary(format!("word '{word}' has no count"))
            })?;

            let normalized = word.to_lowercase();
            match seen.get(&normalized) {
                Some(&first) if first == word.as_str() => continue,
                Some(&first) => {
                    return Err(KeyspellError::dictionary(format!(
                        "words '{first}' and '{word}' differ only by case"
                    )));
                }
                None => {
                    seen.insert(normalized, word);
                    dictionary.add_word(word.as_str(), count);
                }
            }
        }

        info!(
            "Loaded {} words from {}",
            dictionary.word_count(),
            vocab_path.as_ref().display()
        );
        Ok(dictionary)
    }

    /// Save dictionary to a frequency file, most frequent first.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for (word, count) in self.most_frequent_words(self.word_count()) {
            writeln!(writer, "{word} {count}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write a binary snapshot of the dictionary.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = DictionarySnapshot {
            version: SNAPSHOT_VERSION,
            entries: self
                .sorted_entries()
                .into_iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect(),
        };
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a binary snapshot written by [`SpellingDictionary::save_snapshot`].
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let snapshot: DictionarySnapshot =
            bincode::deserialize_from(BufReader::new(File::open(path)?))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(KeyspellError::serialization(format!(
                "unsupported snapshot version {} in {}",
                snapshot.version,
                path.display()
            )));
        }

        let dictionary = Self::from_counts(snapshot.entries);
        info!(
            "Loaded {} words from snapshot {}",
            dictionary.word_count(),
            path.display()
        );
        Ok(dictionary)
    }
}

/// Small built-in dictionaries.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Common English words with estimated counts.
    pub fn english() -> SpellingDictionary {
        SpellingDictionary::from_counts([
            ("the", 1000000),
            ("be", 500000),
            ("to", 450000),
            ("of", 400000),
            ("and", 380000),
            ("a", 350000),
            ("in", 300000),
            ("that", 250000),
            ("have", 200000),
            ("i", 180000),
            ("it", 170000),
            ("for", 160000),
            ("not", 150000),
            ("on", 140000),
            ("with", 130000),
            ("he", 120000),
            ("as", 110000),
            ("you", 100000),
            ("do", 95000),
            ("at", 90000),
            ("this", 85000),
            ("but", 80000),
            ("his", 75000),
            ("by", 70000),
            ("from", 65000),
            ("they", 60000),
            ("we", 55000),
            ("say", 50000),
            ("her", 48000),
            ("she", 46000),
            ("or", 44000),
            ("an", 42000),
            ("will", 40000),
            ("my", 38000),
            ("one", 36000),
            ("all", 34000),
            ("would", 32000),
            ("there", 30000),
            ("their", 28000),
            ("what", 26000),
            ("so", 24000),
            ("up", 22000),
            ("out", 20000),
            ("if", 19000),
            ("about", 18000),
            ("who", 17000),
            ("get", 16000),
            ("which", 15000),
            ("go", 14000),
            ("me", 13000),
            ("when", 12000),
            ("make", 11000),
            ("can", 10000),
            ("like", 9500),
            ("time", 9000),
            ("no", 8500),
            ("is", 8200),
            ("just", 8000),
            ("him", 7500),
            ("hello", 7200),
            ("know", 7000),
            ("world", 6800),
            ("take", 6500),
            ("people", 6000),
            ("into", 5500),
            ("year", 5000),
            ("your", 4800),
            ("good", 4600),
            ("news", 4500),
            ("some", 4400),
            ("could", 4200),
            ("them", 4000),
            ("see", 3800),
            ("other", 3600),
            ("than", 3400),
            ("then", 3200),
            ("now", 3000),
            ("look", 2800),
            ("only", 2600),
            ("come", 2400),
            ("its", 2200),
            ("over", 2000),
            ("think", 1900),
            ("also", 1800),
            ("back", 1700),
            ("after", 1600),
            ("use", 1500),
            ("two", 1400),
            ("how", 1300),
            ("our", 1200),
            ("work", 1100),
            ("first", 1000),
            ("well", 950),
            ("way", 900),
            ("even", 850),
            ("new", 800),
            ("want", 750),
            ("because", 700),
            ("any", 650),
            ("these", 600),
            ("give", 550),
            ("day", 500),
            ("most", 480),
            ("us", 460),
            ("was", 420),
            ("are", 400),
            ("been", 380),
            ("has", 360),
            ("had", 340),
            ("were", 320),
            ("said", 300),
            ("each", 280),
            ("report", 260),
            ("during", 240),
            ("where", 220),
            ("did", 200),
            ("does", 190),
            ("doing", 180),
            ("made", 170),
            ("find", 160),
            ("home", 150),
            ("help", 140),
            ("hand", 130),
            ("right", 120),
            ("life", 100),
            ("love", 95),
            ("house", 90),
            ("water", 85),
            ("place", 80),
            ("word", 75),
            ("before", 70),
            ("through", 65),
            ("still", 60),
            ("here", 55),
            ("should", 50),
            ("never", 48),
            ("those", 44),
            ("came", 42),
            ("may", 40),
            ("part", 38),
            ("against", 36),
            ("such", 34),
            ("turn", 32),
            ("every", 30),
            ("point", 26),
            ("small", 24),
            ("end", 22),
            ("why", 20),
        ])
    }

    /// A minimal dictionary for testing; every word has count 100.
    pub fn minimal() -> SpellingDictionary {
        SpellingDictionary::from_counts(
            [
                "hello",
                "world",
                "search",
                "query",
                "text",
                "word",
                "spell",
                "correct",
                "suggestion",
                "dictionary",
                "language",
                "english",
                "computer",
                "program",
                "software",
                "system",
                "data",
                "information",
                "process",
                "result",
                "value",
                "number",
                "string",
                "character",
            ]
            .into_iter()
            .map(|word| (word, 100)),
        )
    }
}
