//! Golden tests: rhyme queries against the sample dictionary.
//!
//! Inputs live in `test-data/sample.dict`, expected results in
//! `tests/golden/rhymes.json` (both at the workspace root).
//!
//! Run: cargo test -p rhyme-en --test golden

use std::collections::BTreeMap;
use std::path::PathBuf;

use rhyme_en::Dictionary;
use rhyme_en::rhyme::classifier::{RhymeOptions, identical_rhyme, perfect_rhyme, rhyme};
use rhyme_en::rhyme::tail::rhyming_part;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Golden {
    rhyme: BTreeMap<String, Vec<String>>,
    identical: BTreeMap<String, Vec<String>>,
    perfect: BTreeMap<String, Vec<String>>,
    unknown: Vec<String>,
}

fn workspace_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").join(relative)
}

fn load_dictionary() -> Dictionary {
    let path = workspace_path("test-data/sample.dict");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    Dictionary::from_text(&text)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

fn load_golden() -> Golden {
    let path = workspace_path("tests/golden/rhymes.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Golden comparisons
// ---------------------------------------------------------------------------

#[test]
fn golden_rhymes() {
    let dict = load_dictionary();
    let golden = load_golden();
    let opts = RhymeOptions::default();

    for (word, expected) in &golden.rhyme {
        assert_eq!(&rhyme(&dict, word, &opts), expected, "rhyme({word})");
    }
}

#[test]
fn golden_identical_rhymes() {
    let dict = load_dictionary();
    let golden = load_golden();
    let opts = RhymeOptions::default();

    for (word, expected) in &golden.identical {
        let got = identical_rhyme(&dict, word, None, &opts).unwrap();
        assert_eq!(&got, expected, "identical_rhyme({word})");
    }
}

#[test]
fn golden_perfect_rhymes() {
    let dict = load_dictionary();
    let golden = load_golden();
    let opts = RhymeOptions::default();

    for (word, expected) in &golden.perfect {
        let got = perfect_rhyme(&dict, word, None, &opts).unwrap();
        assert_eq!(&got, expected, "perfect_rhyme({word})");
    }
}

#[test]
fn golden_unknown_words() {
    let dict = load_dictionary();
    let golden = load_golden();
    let opts = RhymeOptions::default();

    for word in &golden.unknown {
        assert!(rhyme(&dict, word, &opts).is_empty(), "{word}");
        assert!(identical_rhyme(&dict, word, None, &opts).unwrap().is_empty(), "{word}");
        assert!(perfect_rhyme(&dict, word, None, &opts).unwrap().is_empty(), "{word}");
    }
}

// ---------------------------------------------------------------------------
// Whole-dictionary invariants
// ---------------------------------------------------------------------------

#[test]
fn sample_dictionary_shape() {
    let dict = load_dictionary();
    assert_eq!(dict.len(), 44);
    assert_eq!(dict.pronunciation_count(), 45);
}

#[test]
fn tails_are_suffixes() {
    let dict = load_dictionary();
    for (word, variants) in dict.entries() {
        for p in variants {
            let tail = rhyming_part(p.phones());
            assert!(!tail.is_empty(), "{word}");
            assert!(p.phones().ends_with(tail), "{word}");
        }
    }
}

#[test]
fn every_word_satisfies_classification_invariants() {
    let dict = load_dictionary();
    let opts = RhymeOptions::default();

    for (word, _) in dict.entries() {
        let all = rhyme(&dict, word, &opts);
        let identical = identical_rhyme(&dict, word, None, &opts).unwrap();
        let perfect = perfect_rhyme(&dict, word, None, &opts).unwrap();

        assert!(!all.iter().any(|w| w == word), "{word} in own rhymes");
        assert!(!identical.iter().any(|w| w == word), "{word} in own identical");
        assert!(!perfect.iter().any(|w| w == word), "{word} in own perfect");
        for p in &perfect {
            assert!(!identical.contains(p), "{word}: {p} in both sets");
            assert!(all.contains(p), "{word}: {p} missing from rhymes");
        }
    }
}
