// Rhyme classification: plain, identical and perfect rhymes
//
// - rhyme: every word sharing a rhyme tail with any pronunciation of the
//   query word.
// - identical: words whose pronunciation ends in the query's onset followed
//   by its rhyme tail (same sound before the stressed vowel).
// - perfect: rhymes that are not identical rhymes.

use hashbrown::HashSet;
use regex::Regex;
use rhyme_core::pronunciation::Pronunciation;
use tracing::trace;

use crate::dictionary::Dictionary;
use crate::rhyme::RhymeError;
use crate::rhyme::onset::onset_pattern_for;
use crate::rhyme::tail::rhyme_tail_key;

/// Options controlling rhyme result lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeOptions {
    /// Leave the query word out of every result. Default: true.
    pub exclude_query_word: bool,
    /// List each word once in identical-rhyme results, even when several of
    /// its pronunciations match. Default: true.
    pub dedup_identical: bool,
}

impl Default for RhymeOptions {
    fn default() -> Self {
        Self {
            exclude_query_word: true,
            dedup_identical: true,
        }
    }
}

/// All words sharing a rhyme tail with any pronunciation of `word`.
///
/// Returns a sorted, deduplicated list. Unknown words have no rhymes.
pub fn rhyme(dict: &Dictionary, word: &str, options: &RhymeOptions) -> Vec<String> {
    let query = normalize_query(word);
    let mut out: Vec<String> = dict
        .phones_for_word(&query)
        .iter()
        .flat_map(|p| dict.rhyme_index().words_for(&rhyme_tail_key(p)))
        .filter(|w| !(options.exclude_query_word && **w == query))
        .cloned()
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Words that rhyme with `word` and share its onset.
///
/// `pronunciation` selects one of the word's variants; when omitted the
/// first variant is used, and an unknown word yields an empty list. Results
/// follow dictionary order.
pub fn identical_rhyme(
    dict: &Dictionary,
    word: &str,
    pronunciation: Option<&str>,
    options: &RhymeOptions,
) -> Result<Vec<String>, RhymeError> {
    let query = normalize_query(word);
    let Some(resolved) = resolve_pronunciation(dict, &query, pronunciation)? else {
        return Ok(Vec::new());
    };

    let pattern = onset_pattern_for(resolved.phones());
    let source = format!(r"\b{}\b", pattern.regex_source());
    trace!(word = %query, pattern = %source, "identical rhyme search");
    let re = Regex::new(&source)?;

    let mut out = Vec::new();
    for (candidate, variants) in dict.entries() {
        if options.exclude_query_word && candidate == query {
            continue;
        }
        if options.dedup_identical {
            if variants.iter().any(|p| re.is_match(p.as_str())) {
                out.push(candidate.to_string());
            }
        } else {
            out.extend(
                variants
                    .iter()
                    .filter(|p| re.is_match(p.as_str()))
                    .map(|_| candidate.to_string()),
            );
        }
    }
    Ok(out)
}

/// Rhymes of `word` that are not identical rhymes, sorted and deduplicated.
pub fn perfect_rhyme(
    dict: &Dictionary,
    word: &str,
    pronunciation: Option<&str>,
    options: &RhymeOptions,
) -> Result<Vec<String>, RhymeError> {
    let query = normalize_query(word);
    let identical: HashSet<String> = identical_rhyme(dict, &query, pronunciation, options)?
        .into_iter()
        .collect();

    Ok(rhyme(dict, &query, options)
        .into_iter()
        .filter(|w| *w != query && !identical.contains(w))
        .collect())
}

/// Resolve the pronunciation to classify against.
///
/// An explicit pronunciation must be one of the word's variants.
fn resolve_pronunciation<'d>(
    dict: &'d Dictionary,
    word: &str,
    pronunciation: Option<&str>,
) -> Result<Option<&'d Pronunciation>, RhymeError> {
    let Some(raw) = pronunciation else {
        return Ok(dict.phones_for_word(word).first());
    };
    if raw.trim().is_empty() {
        return Err(RhymeError::EmptyPronunciation {
            word: word.to_string(),
        });
    }

    let invalid = || RhymeError::InvalidPronunciation {
        word: word.to_string(),
        pronunciation: raw.to_string(),
    };
    let parsed = Pronunciation::parse(raw).map_err(|_| invalid())?;
    dict.phones_for_word(word)
        .iter()
        .find(|p| **p == parsed)
        .map(Some)
        .ok_or_else(invalid)
}

fn normalize_query(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
READER  R IY1 D ER0
LEADER  L IY1 D ER0
BLEEDER  B L IY1 D ER0
BELIEVE  B IH0 L IY1 V
LEAVE  L IY1 V
SLEEVE  S L IY1 V
WEAVE  W IY1 V
CACTUS  K AE1 K T AH0 S
PRACTICE  P R AE1 K T AH0 S
REACT  R IY0 AE1 K T
ACT  AE1 K T
INTERACT  IH2 N T ER0 AE1 K T
FACT  F AE1 K T
TACT  T AE1 K T
READ  R EH1 D
READ(2)  R IY1 D
RED  R EH1 D
BED  B EH1 D
REED  R IY1 D
NEED  N IY1 D
EAT  IY1 T
BEAT  B IY1 T
SEAT  S IY1 T
";

    fn dict() -> Dictionary {
        Dictionary::from_text(FIXTURE).unwrap()
    }

    fn opts() -> RhymeOptions {
        RhymeOptions::default()
    }

    #[test]
    fn rhyme_shares_tail() {
        let d = dict();
        assert_eq!(rhyme(&d, "cactus", &opts()), ["practice"]);
        assert_eq!(rhyme(&d, "reader", &opts()), ["bleeder", "leader"]);
    }

    #[test]
    fn rhyme_unions_all_variants() {
        let d = dict();
        assert_eq!(rhyme(&d, "read", &opts()), ["bed", "need", "red", "reed"]);
    }

    #[test]
    fn rhyme_of_unknown_word_is_empty() {
        assert!(rhyme(&dict(), "zebra", &opts()).is_empty());
    }

    #[test]
    fn rhyme_query_is_case_insensitive() {
        assert_eq!(rhyme(&dict(), "Cactus", &opts()), ["practice"]);
    }

    #[test]
    fn different_onset_is_not_identical() {
        let d = dict();
        let identical = identical_rhyme(&d, "reader", None, &opts()).unwrap();
        assert!(!identical.contains(&"leader".to_string()));
        let perfect = perfect_rhyme(&d, "reader", None, &opts()).unwrap();
        assert!(perfect.contains(&"leader".to_string()));
        assert_eq!(perfect, ["bleeder", "leader"]);
    }

    #[test]
    fn shared_onset_is_identical() {
        let d = dict();
        assert_eq!(
            identical_rhyme(&d, "leave", None, &opts()).unwrap(),
            ["believe", "sleeve"]
        );
        assert_eq!(perfect_rhyme(&d, "leave", None, &opts()).unwrap(), ["weave"]);
        assert_eq!(
            identical_rhyme(&d, "leader", None, &opts()).unwrap(),
            ["bleeder"]
        );
    }

    #[test]
    fn cluster_onset_must_match_whole() {
        let d = dict();
        assert!(identical_rhyme(&d, "sleeve", None, &opts()).unwrap().is_empty());
        assert_eq!(
            perfect_rhyme(&d, "sleeve", None, &opts()).unwrap(),
            ["believe", "leave", "weave"]
        );
    }

    #[test]
    fn null_onset_matches_vowel_or_word_start() {
        let d = dict();
        assert_eq!(
            identical_rhyme(&d, "react", None, &opts()).unwrap(),
            ["act", "interact"]
        );
        assert_eq!(
            perfect_rhyme(&d, "react", None, &opts()).unwrap(),
            ["fact", "tact"]
        );
    }

    #[test]
    fn initial_stress_has_no_onset_constraint() {
        let d = dict();
        assert_eq!(
            identical_rhyme(&d, "eat", None, &opts()).unwrap(),
            ["beat", "seat"]
        );
        assert!(perfect_rhyme(&d, "eat", None, &opts()).unwrap().is_empty());
    }

    #[test]
    fn explicit_pronunciation_selects_variant() {
        let d = dict();
        assert_eq!(identical_rhyme(&d, "read", None, &opts()).unwrap(), ["red"]);
        assert_eq!(
            identical_rhyme(&d, "read", Some("r iy1 d"), &opts()).unwrap(),
            ["reed"]
        );
        assert_eq!(
            perfect_rhyme(&d, "read", Some("R IY1 D"), &opts()).unwrap(),
            ["bed", "need", "red"]
        );
    }

    #[test]
    fn foreign_pronunciation_is_rejected() {
        let d = dict();
        let err = identical_rhyme(&d, "reader", Some("L IY1 D ER0"), &opts()).unwrap_err();
        assert!(matches!(err, RhymeError::InvalidPronunciation { .. }));
        let err = perfect_rhyme(&d, "zebra", Some("Z IY1 B R AH0"), &opts()).unwrap_err();
        assert!(matches!(err, RhymeError::InvalidPronunciation { .. }));
        let err = identical_rhyme(&d, "reader", Some("R IY1 ?"), &opts()).unwrap_err();
        assert!(matches!(err, RhymeError::InvalidPronunciation { .. }));
    }

    #[test]
    fn empty_pronunciation_is_rejected() {
        let d = dict();
        let err = identical_rhyme(&d, "reader", Some(""), &opts()).unwrap_err();
        assert!(matches!(err, RhymeError::EmptyPronunciation { .. }));
        let err = perfect_rhyme(&d, "reader", Some("  "), &opts()).unwrap_err();
        assert!(matches!(err, RhymeError::EmptyPronunciation { .. }));
    }

    #[test]
    fn unknown_word_without_pronunciation_is_empty() {
        let d = dict();
        assert!(identical_rhyme(&d, "zebra", None, &opts()).unwrap().is_empty());
        assert!(perfect_rhyme(&d, "zebra", None, &opts()).unwrap().is_empty());
    }

    #[test]
    fn duplicate_matches_kept_without_dedup() {
        let d = Dictionary::from_text("EAT  IY1 T\nBEAT  B IY1 T\nBEAT(2)  AH0 B IY1 T\n").unwrap();
        let keep = RhymeOptions {
            dedup_identical: false,
            ..RhymeOptions::default()
        };
        assert_eq!(identical_rhyme(&d, "eat", None, &keep).unwrap(), ["beat", "beat"]);
        assert_eq!(identical_rhyme(&d, "eat", None, &opts()).unwrap(), ["beat"]);
    }

    #[test]
    fn query_word_can_be_included() {
        let d = dict();
        let keep = RhymeOptions {
            exclude_query_word: false,
            ..RhymeOptions::default()
        };
        assert_eq!(rhyme(&d, "cactus", &keep), ["cactus", "practice"]);
        assert_eq!(
            identical_rhyme(&d, "leave", None, &keep).unwrap(),
            ["believe", "leave", "sleeve"]
        );
        // Perfect rhymes never contain the query word.
        assert_eq!(perfect_rhyme(&d, "leave", None, &keep).unwrap(), ["weave"]);
    }

    #[test]
    fn classification_properties_hold_for_every_word() {
        let d = dict();
        for (word, _) in d.entries() {
            let all = rhyme(&d, word, &opts());
            let identical = identical_rhyme(&d, word, None, &opts()).unwrap();
            let perfect = perfect_rhyme(&d, word, None, &opts()).unwrap();

            let w = word.to_string();
            assert!(!all.contains(&w), "{word} rhymes with itself");
            assert!(!identical.contains(&w), "{word} identical to itself");
            assert!(!perfect.contains(&w), "{word} perfect with itself");

            for p in &perfect {
                assert!(!identical.contains(p), "{word}: {p} is both");
                assert!(all.contains(p), "{word}: perfect {p} not a rhyme");
            }
            let mut sorted = perfect.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted, perfect, "{word}: perfect not sorted");
        }
    }
}
