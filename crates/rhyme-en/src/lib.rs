//! English rhyme engine.
//!
//! Finds rhyming words using a CMU-style pronunciation dictionary. A word's
//! rhyme tail is the part of its pronunciation from the last stressed vowel
//! onward; words sharing a tail rhyme. Rhymes are further split by the onset
//! in front of the tail into identical rhymes (same onset) and perfect rhymes
//! (different onset).
//!
//! # Architecture
//!
//! - [`dictionary`] -- Dictionary parsing, word lookup and the rhyme index
//! - [`english`] -- English onset consonant clusters
//! - [`rhyme`] -- Rhyme tail extraction, onset scanning and classification
//! - [`search`] -- Regex search over pronunciations and stress patterns
//! - [`handle`] -- `RhymeHandle`, owning a dictionary and query options

pub mod dictionary;
pub mod english;
#[cfg(feature = "handle")]
pub mod handle;
pub mod rhyme;
#[cfg(feature = "search")]
pub mod search;

pub use dictionary::{Dictionary, DictionaryError};
pub use rhyme::RhymeError;
pub use rhyme_core::{Pronunciation, Stress};
