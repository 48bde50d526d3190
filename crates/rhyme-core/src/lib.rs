//! Shared types for rhyme lookup.
//!
//! - [`phoneme`] -- ARPAbet-style phoneme classification (stress, vowel, consonant)
//! - [`pronunciation`] -- Ordered phoneme sequence for one way of saying a word
//! - [`word`] -- Dictionary word-token normalization

pub mod phoneme;
pub mod pronunciation;
pub mod word;

pub use phoneme::Stress;
pub use pronunciation::{Pronunciation, PronunciationError};
