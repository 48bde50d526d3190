// Pronunciation: one ordered phoneme sequence for a word

use std::fmt;
use std::str::FromStr;

use crate::phoneme::{is_valid_symbol, is_vowel, stress_of};

/// Error type for pronunciation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PronunciationError {
    #[error("pronunciation is empty")]
    Empty,
    #[error("invalid phoneme symbol: {0:?}")]
    InvalidPhoneme(String),
}

/// One way to say a word, as a sequence of phoneme symbols.
///
/// The canonical text form is the symbols joined by single spaces, which is
/// also the form used for pattern matching against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pronunciation {
    phones: Vec<String>,
    text: String,
}

impl Pronunciation {
    /// Parse a whitespace-separated phoneme string.
    ///
    /// Symbols are uppercased, so `"k ae1 t"` and `"K AE1 T"` are the same
    /// pronunciation.
    pub fn parse(s: &str) -> Result<Self, PronunciationError> {
        let phones = s
            .split_whitespace()
            .map(|p| {
                let p = p.to_ascii_uppercase();
                if is_valid_symbol(&p) {
                    Ok(p)
                } else {
                    Err(PronunciationError::InvalidPhoneme(p))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_phones(phones)
    }

    /// Build a pronunciation from already-normalized symbols.
    pub fn from_phones(phones: Vec<String>) -> Result<Self, PronunciationError> {
        if phones.is_empty() {
            return Err(PronunciationError::Empty);
        }
        let text = phones.join(" ");
        Ok(Self { phones, text })
    }

    /// The phoneme symbols in order.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// Space-joined canonical form.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    /// Never true for a value built by `parse` or `from_phones`.
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Stress digits of the vowels, in order (e.g. `"102"`).
    pub fn stresses(&self) -> String {
        self.phones
            .iter()
            .filter_map(|p| stress_of(p))
            .map(|s| s.digit())
            .collect()
    }

    /// Number of syllables, counted as the number of vowel phonemes.
    pub fn syllable_count(&self) -> usize {
        self.phones.iter().filter(|p| is_vowel(p)).count()
    }
}

impl FromStr for Pronunciation {
    type Err = PronunciationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Pronunciation {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
