// Rhyme matching
//
// - `tail` extracts the rhyming part of a pronunciation.
// - `onset` finds the consonant onset before the last stressed vowel and
//   turns it into a search pattern.
// - `classifier` splits rhymes into identical and perfect rhymes.

pub mod tail;
#[cfg(feature = "classify")]
pub mod onset;
#[cfg(feature = "classify")]
pub mod classifier;

/// Error type for rhyme queries.
#[derive(Debug, thiserror::Error)]
pub enum RhymeError {
    /// The supplied pronunciation is not one of the word's known variants.
    #[error("{pronunciation:?} is not a known pronunciation of {word:?}")]
    InvalidPronunciation { word: String, pronunciation: String },

    /// The resolved pronunciation is empty.
    #[error("empty pronunciation for {word:?}")]
    EmptyPronunciation { word: String },

    /// A search pattern failed to compile.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}
