// Phoneme classification
//
// A phoneme is an uppercase ARPAbet symbol. Vowels always carry a trailing
// stress digit (0, 1 or 2); consonants never do.

/// Lexical stress carried by a vowel phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stress {
    /// No stress (digit `0`).
    Unstressed,
    /// Primary stress (digit `1`).
    Primary,
    /// Secondary stress (digit `2`).
    Secondary,
}

impl Stress {
    /// Parse a stress digit.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    /// The digit used for this stress level in dictionary files.
    pub fn digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }
}

/// Returns the stress marker of a phoneme, or `None` for consonants.
pub fn stress_of(phoneme: &str) -> Option<Stress> {
    phoneme.chars().next_back().and_then(Stress::from_digit)
}

/// True iff the phoneme ends in `1` or `2`.
pub fn is_stressed_vowel(phoneme: &str) -> bool {
    matches!(
        stress_of(phoneme),
        Some(Stress::Primary | Stress::Secondary)
    )
}

/// True iff the phoneme ends in any stress digit.
pub fn is_vowel(phoneme: &str) -> bool {
    stress_of(phoneme).is_some()
}

/// True iff the phoneme carries no stress digit at all.
///
/// The empty string is not a phoneme and is never a consonant.
pub fn is_consonant(phoneme: &str) -> bool {
    !phoneme.is_empty() && stress_of(phoneme).is_none()
}

/// Strip the stress digit from a vowel, leaving consonants unchanged.
pub fn base_symbol(phoneme: &str) -> &str {
    if is_vowel(phoneme) {
        &phoneme[..phoneme.len() - 1]
    } else {
        phoneme
    }
}

/// Check whether a string is a well-formed phoneme symbol: one or more
/// ASCII uppercase letters, optionally followed by a single stress digit.
pub fn is_valid_symbol(phoneme: &str) -> bool {
    let base = base_symbol(phoneme);
    !base.is_empty() && base.bytes().all(|b| b.is_ascii_uppercase())
}
