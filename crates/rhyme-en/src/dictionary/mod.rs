// Pronunciation dictionary: parsing and word lookup
//
// Input is CMU-style text, one pronunciation per line:
//
//   ;;; comment
//   READ  R EH1 D
//   READ(2)  R IY1 D
//
// Variants of the same base word accumulate in file order.

mod index;

pub use index::RhymeIndex;

use hashbrown::HashMap;
use rhyme_core::pronunciation::{Pronunciation, PronunciationError};
use rhyme_core::word::{normalize_word, variant_index};
use tracing::{debug, warn};

/// Error type for dictionary parsing.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// A non-comment line has no space separating word and phonemes.
    #[error("malformed dictionary line {line_number}: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    /// The phoneme part of a line is not a valid pronunciation.
    #[error("invalid pronunciation on dictionary line {line_number}: {source}")]
    InvalidPronunciation {
        line_number: usize,
        #[source]
        source: PronunciationError,
    },
}

/// Parsed pronunciation dictionary with its rhyme index.
///
/// Built once and read-only afterwards; all rhyme queries borrow it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Base word -> pronunciation variants in file order.
    lookup: HashMap<String, Vec<Pronunciation>>,
    /// Distinct words in order of first appearance.
    order: Vec<String>,
    /// Rhyme tail -> owning words.
    rhyme_index: RhymeIndex,
    pronunciation_count: usize,
}

impl Dictionary {
    /// Parse dictionary lines.
    ///
    /// Blank lines and lines starting with `;` are skipped. A trailing
    /// `# ...` comment is removed before the line is split on its first space.
    /// Any malformed line aborts the whole parse.
    pub fn parse<I, S>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lookup: HashMap<String, Vec<Pronunciation>> = HashMap::new();
        let mut order = Vec::new();
        let mut pronunciation_count = 0;

        for (i, raw) in lines.into_iter().enumerate() {
            let line_number = i + 1;
            let line = strip_comment(raw.as_ref().trim());
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let Some((token, phones)) = line.split_once(' ') else {
                return Err(DictionaryError::MalformedLine {
                    line_number,
                    line: line.to_string(),
                });
            };
            let word = normalize_word(token);
            if word.is_empty() {
                return Err(DictionaryError::MalformedLine {
                    line_number,
                    line: line.to_string(),
                });
            }
            if variant_index(token).is_none() {
                warn!(line_number, token, "unrecognized variant suffix");
            }

            let pronunciation = Pronunciation::parse(phones).map_err(|source| {
                DictionaryError::InvalidPronunciation {
                    line_number,
                    source,
                }
            })?;

            let variants = lookup.entry(word).or_insert_with_key(|w| {
                order.push(w.clone());
                Vec::new()
            });
            variants.push(pronunciation);
            pronunciation_count += 1;
        }

        let rhyme_index = RhymeIndex::build(
            order
                .iter()
                .flat_map(|w| lookup[w].iter().map(move |p| (w.as_str(), p))),
        );

        debug!(
            words = order.len(),
            pronunciations = pronunciation_count,
            rhyme_tails = rhyme_index.len(),
            "dictionary loaded"
        );

        Ok(Self {
            lookup,
            order,
            rhyme_index,
            pronunciation_count,
        })
    }

    /// Parse a whole dictionary held in memory.
    pub fn from_text(text: &str) -> Result<Self, DictionaryError> {
        Self::parse(text.lines())
    }

    /// Pronunciation variants for a word, in file order.
    ///
    /// The word is lowercased before lookup; an unknown word yields an
    /// empty slice.
    pub fn phones_for_word(&self, word: &str) -> &[Pronunciation] {
        self.lookup
            .get(word.to_lowercase().as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains_key(word.to_lowercase().as_str())
    }

    /// Iterate over `(word, pronunciations)` in order of first appearance.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[Pronunciation])> {
        self.order
            .iter()
            .map(|w| (w.as_str(), self.lookup[w].as_slice()))
    }

    pub fn rhyme_index(&self) -> &RhymeIndex {
        &self.rhyme_index
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of pronunciation variants across all words.
    pub fn pronunciation_count(&self) -> usize {
        self.pronunciation_count
    }
}

/// Remove a trailing `# comment`, as found in `cmudict.dict`.
fn strip_comment(line: &str) -> &str {
    match line.find(" #") {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}
