// Reverse index from rhyme tail to words

use hashbrown::HashMap;
use rhyme_core::pronunciation::Pronunciation;

use crate::rhyme::tail::rhyme_tail_key;

/// Maps a canonical rhyme tail (space-joined phonemes) to every word owning
/// a pronunciation with that tail.
///
/// A word appears once per matching pronunciation, so a word with two
/// variants sharing a tail is listed twice. Callers deduplicate as needed.
#[derive(Debug, Clone, Default)]
pub struct RhymeIndex {
    by_tail: HashMap<String, Vec<String>>,
}

impl RhymeIndex {
    /// Build the index from `(word, pronunciation)` pairs.
    pub fn build<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a Pronunciation)>,
    {
        let mut by_tail: HashMap<String, Vec<String>> = HashMap::new();
        for (word, pronunciation) in pairs {
            by_tail
                .entry(rhyme_tail_key(pronunciation))
                .or_default()
                .push(word.to_string());
        }
        Self { by_tail }
    }

    /// Words sharing the given tail, in insertion order.
    pub fn words_for(&self, tail: &str) -> &[String] {
        self.by_tail
            .get(tail)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct tails.
    pub fn len(&self) -> usize {
        self.by_tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tail.is_empty()
    }
}
