// Rhyme tail extraction

use rhyme_core::phoneme::is_stressed_vowel;
use rhyme_core::pronunciation::Pronunciation;

/// Index of the last stressed vowel, scanning from the end down to index 1.
///
/// Index 0 is never searched: a pronunciation whose only stressed vowel is
/// first, or which has no stressed vowel at all, yields 0.
pub fn last_stressed_index(phones: &[String]) -> usize {
    (1..phones.len())
        .rev()
        .find(|&i| is_stressed_vowel(&phones[i]))
        .unwrap_or(0)
}

/// The rhyming part of a phoneme sequence: the suffix starting at the last
/// stressed vowel, or the whole sequence when there is none after index 0.
pub fn rhyming_part(phones: &[String]) -> &[String] {
    &phones[last_stressed_index(phones)..]
}

/// Canonical space-joined rhyme tail, used as the rhyme index key.
pub fn rhyme_tail_key(pronunciation: &Pronunciation) -> String {
    rhyming_part(pronunciation.phones()).join(" ")
}
