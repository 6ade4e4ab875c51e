//! Known-word correction by enumerating nearby edits.
//!
//! Candidates are searched in widening rings: the word itself if it is known,
//! then known words one edit away, then known words two edits away. The most
//! frequent candidate of the first non-empty ring wins; if no ring contains a
//! known word the input is returned unchanged.

use std::collections::BTreeSet;

use crate::spelling::dictionary::SpellingDictionary;

/// Letters used for replacements and insertions.
const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Corrects words against a frequency dictionary using single and double edits.
#[derive(Debug, Clone, Copy)]
pub struct SpellingCorrector<'a> {
    dictionary: &'a SpellingDictionary,
}

impl<'a> SpellingCorrector<'a> {
    /// Create a corrector over the given dictionary.
    pub fn new(dictionary: &'a SpellingDictionary) -> Self {
        SpellingCorrector { dictionary }
    }

    /// Best correction for `word`.
    ///
    /// Picks the most frequent candidate, preferring the alphabetically first
    /// word among equal counts.
    pub fn correct(&self, word: &str) -> String {
        self.candidates(word)
            .into_iter()
            .max_by(|a, b| {
                self.dictionary
                    .frequency(a)
                    .cmp(&self.dictionary.frequency(b))
                    .then_with(|| b.cmp(a))
            })
            .unwrap_or_else(|| word.to_string())
    }

    /// Candidate corrections from the closest non-empty edit ring.
    pub fn candidates(&self, word: &str) -> BTreeSet<String> {
        if self.dictionary.contains(word) {
            return BTreeSet::from([word.to_string()]);
        }

        let first_ring = edits1(word);
        let known = self.known(first_ring.iter().map(String::as_str));
        if !known.is_empty() {
            return known;
        }

        let mut known = BTreeSet::new();
        for edit in &first_ring {
            for second in edits1(edit) {
                if self.dictionary.contains(&second) {
                    known.insert(second);
                }
            }
        }
        if !known.is_empty() {
            return known;
        }

        BTreeSet::from([word.to_string()])
    }

    /// The subset of `words` present in the dictionary.
    fn known<'w>(&self, words: impl Iterator<Item = &'w str>) -> BTreeSet<String> {
        words
            .filter(|word| self.dictionary.contains(word))
            .map(str::to_string)
            .collect()
    }
}

/// All strings one edit away from `word`.
///
/// Edits are deletions, adjacent transpositions, replacements and insertions
/// over the lowercase ASCII alphabet.
pub fn edits1(word: &str) -> BTreeSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = BTreeSet::new();

    // Deletions
    for i in 0..len {
        let mut new_word = chars.clone();
        new_word.remove(i);
        edits.insert(new_word.into_iter().collect());
    }

    // Transpositions (swapping adjacent characters)
    for i in 0..len.saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        edits.insert(new_word.into_iter().collect());
    }

    // Replacements
    for i in 0..len {
        for ch in ALPHABET {
            let mut new_word = chars.clone();
            new_word[i] = ch;
            edits.insert(new_word.into_iter().collect());
        }
    }

    // Insertions
    for i in 0..=len {
        for ch in ALPHABET {
            let mut new_word = chars.clone();
            new_word.insert(i, ch);
            edits.insert(new_word.into_iter().collect());
        }
    }

    edits
}
