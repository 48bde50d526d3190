// RhymeHandle: top-level integration point for rhyme lookup.
//
// Owns the parsed dictionary (with its rhyme index) and the query options,
// and exposes every query through one interface. The dictionary is built
// once at construction and never mutated, so a handle can be shared across
// threads behind an `Arc` for read-only use.

use rhyme_core::pronunciation::Pronunciation;

use crate::dictionary::{Dictionary, DictionaryError};
use crate::rhyme::RhymeError;
use crate::rhyme::classifier::{self, RhymeOptions};
use crate::rhyme::tail::rhyme_tail_key;
use crate::search;

/// Top-level handle owning a dictionary and query options.
#[derive(Debug, Clone)]
pub struct RhymeHandle {
    dictionary: Dictionary,
    options: RhymeOptions,
}

impl RhymeHandle {
    /// Wrap an already-parsed dictionary with default options.
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            options: RhymeOptions::default(),
        }
    }

    /// Parse dictionary lines and build a handle.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary::parse(lines).map(Self::new)
    }

    /// Parse a whole dictionary text and build a handle.
    pub fn from_text(text: &str) -> Result<Self, DictionaryError> {
        Dictionary::from_text(text).map(Self::new)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> &RhymeOptions {
        &self.options
    }

    // -- Options --

    /// Include or exclude the query word from rhyme and identical-rhyme
    /// results. Perfect rhymes never include it.
    pub fn set_exclude_query_word(&mut self, value: bool) {
        self.options.exclude_query_word = value;
    }

    /// List a word once per matching pronunciation (false) or once overall
    /// (true) in identical-rhyme results.
    pub fn set_dedup_identical(&mut self, value: bool) {
        self.options.dedup_identical = value;
    }

    // -- Lookup --

    /// Pronunciation variants of a word, empty if unknown.
    pub fn phones_for_word(&self, word: &str) -> &[Pronunciation] {
        self.dictionary.phones_for_word(word)
    }

    /// Rhyme tail of each pronunciation of a word, in variant order.
    pub fn rhyming_parts(&self, word: &str) -> Vec<String> {
        self.phones_for_word(word)
            .iter()
            .map(rhyme_tail_key)
            .collect()
    }

    // -- Rhymes --

    /// All rhymes of a word, sorted and deduplicated.
    pub fn rhymes(&self, word: &str) -> Vec<String> {
        classifier::rhyme(&self.dictionary, word, &self.options)
    }

    /// Rhymes sharing the word's onset. See [`classifier::identical_rhyme`].
    pub fn identical_rhymes(
        &self,
        word: &str,
        pronunciation: Option<&str>,
    ) -> Result<Vec<String>, RhymeError> {
        classifier::identical_rhyme(&self.dictionary, word, pronunciation, &self.options)
    }

    /// Rhymes with a different onset. See [`classifier::perfect_rhyme`].
    pub fn perfect_rhymes(
        &self,
        word: &str,
        pronunciation: Option<&str>,
    ) -> Result<Vec<String>, RhymeError> {
        classifier::perfect_rhyme(&self.dictionary, word, pronunciation, &self.options)
    }

    // -- Search --

    /// Words whose pronunciation matches a phoneme regex.
    pub fn search(&self, pattern: &str) -> Result<Vec<String>, RhymeError> {
        search::search(&self.dictionary, pattern)
    }

    /// Words whose stress string matches a regex.
    pub fn search_stresses(&self, pattern: &str) -> Result<Vec<String>, RhymeError> {
        search::search_stresses(&self.dictionary, pattern)
    }
}
