// Onset scanning and identical-rhyme search patterns
//
// Starting just before the last stressed vowel, consonants are collected
// backward while the collected run is a single consonant or a recognized
// onset cluster. The run found this way must appear verbatim in front of the
// rhyme tail for two words to be identical rhymes.

use rhyme_core::phoneme::is_consonant;
use tracing::trace;

use crate::english::is_consonant_cluster;
use crate::rhyme::tail::last_stressed_index;

/// Regex fragment matching one vowel phoneme plus its trailing space, or the
/// start of the pronunciation.
///
/// Assumes two-letter vowel symbols, which holds for ARPAbet.
pub const NULL_ONSET_PREFIX: &str = "((..(0|1|2) )|^)";

/// How the syllable carrying the last stressed vowel begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnsetKind {
    /// The stressed vowel is the first phoneme; nothing is required before it.
    Initial,
    /// One consonant or a recognized cluster precedes the stressed vowel.
    Consonantal,
    /// A vowel directly precedes the stressed vowel.
    Null,
}

/// Onset and rhyme tail of one pronunciation, borrowed from its phonemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnsetPattern<'a> {
    pub kind: OnsetKind,
    pub onset: &'a [String],
    pub tail: &'a [String],
}

impl OnsetPattern<'_> {
    /// Regex source anchored at the end of a pronunciation string.
    ///
    /// Callers wrap this in word boundaries before matching.
    pub fn regex_source(&self) -> String {
        let tail = join_escaped(self.tail);
        match self.kind {
            OnsetKind::Initial => format!("{tail}$"),
            OnsetKind::Consonantal => format!("{} {tail}$", join_escaped(self.onset)),
            OnsetKind::Null => format!("{NULL_ONSET_PREFIX}{tail}$"),
        }
    }
}

/// Start index of the onset before the vowel at `stressed`.
///
/// Equal to `stressed` when no consonant precedes it.
pub fn onset_start(phones: &[String], stressed: usize) -> usize {
    let mut start = stressed;
    while start > 0 && is_consonant(&phones[start - 1]) {
        let candidate = start - 1;
        if stressed - candidate >= 2 {
            let run = phones[candidate..stressed].join(" ");
            if !is_consonant_cluster(&run) {
                trace!(run = %run, "onset stops before non-cluster");
                break;
            }
        }
        start = candidate;
    }
    start
}

/// Split a pronunciation into onset and tail around the vowel at `stressed`.
pub fn onset_search_pattern(phones: &[String], stressed: usize) -> OnsetPattern<'_> {
    let tail = &phones[stressed..];
    if stressed == 0 {
        return OnsetPattern {
            kind: OnsetKind::Initial,
            onset: &[],
            tail,
        };
    }

    let start = onset_start(phones, stressed);
    let kind = if start == stressed {
        OnsetKind::Null
    } else {
        OnsetKind::Consonantal
    };
    OnsetPattern {
        kind,
        onset: &phones[start..stressed],
        tail,
    }
}

/// Onset pattern around the last stressed vowel of a pronunciation.
pub fn onset_pattern_for(phones: &[String]) -> OnsetPattern<'_> {
    onset_search_pattern(phones, last_stressed_index(phones))
}

fn join_escaped(phones: &[String]) -> String {
    phones
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join(" ")
}
