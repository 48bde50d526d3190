// Pattern search over the dictionary
//
// Phoneme patterns are regular expressions matched against the space-joined
// pronunciation, wrapped in word boundaries so that `"IY1 T$"` cannot match
// inside a longer symbol. Stress patterns are matched against the string of
// stress digits (e.g. `"^10+$"`).

use regex::Regex;
use tracing::trace;

use crate::dictionary::Dictionary;
use crate::rhyme::RhymeError;

/// Words with at least one pronunciation matching a phoneme regex.
///
/// Results follow dictionary order, one entry per word.
pub fn search(dict: &Dictionary, pattern: &str) -> Result<Vec<String>, RhymeError> {
    let source = format!(r"\b{pattern}\b");
    trace!(pattern = %source, "phoneme search");
    let re = Regex::new(&source)?;
    Ok(collect_matches(dict, |p| re.is_match(p.as_str())))
}

/// Words with at least one pronunciation whose stress string matches a regex.
pub fn search_stresses(dict: &Dictionary, pattern: &str) -> Result<Vec<String>, RhymeError> {
    trace!(pattern, "stress search");
    let re = Regex::new(pattern)?;
    Ok(collect_matches(dict, |p| re.is_match(&p.stresses())))
}

fn collect_matches<F>(dict: &Dictionary, mut is_match: F) -> Vec<String>
where
    F: FnMut(&rhyme_core::Pronunciation) -> bool,
{
    dict.entries()
        .filter(|(_, variants)| variants.iter().any(&mut is_match))
        .map(|(word, _)| word.to_string())
        .collect()
}
