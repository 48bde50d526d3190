// English onset consonant clusters.
//
// A closed reference set of two- and three-consonant sequences that may open
// a syllable together. Entries are space-separated ARPAbet symbols without
// stress digits. Every three-consonant entry ends in a two-consonant entry,
// so a backward scan can grow a cluster one phoneme at a time.

/// Recognized onset clusters, grouped by first consonant.
pub const CONSONANT_CLUSTERS: &[&str] = &[
    // Stop + liquid / glide
    "P L", "P R", "P W", "P Y",
    "B L", "B R", "B Y",
    "T R", "T W", "T Y",
    "D R", "D W", "D Y",
    "K L", "K R", "K W", "K Y",
    "G L", "G R", "G W", "G Y",
    // Fricative + liquid / glide
    "F L", "F R", "F Y",
    "V L", "V R", "V Y",
    "TH R", "TH W",
    "SH L", "SH M", "SH N", "SH R", "SH W",
    "HH W", "HH Y",
    // Nasal / liquid + glide
    "M Y", "N Y", "L Y",
    // S + consonant
    "S F", "S K", "S L", "S M", "S N", "S P", "S T", "S W",
    // S + stop + liquid / glide
    "S K L", "S K R", "S K W", "S K Y",
    "S P L", "S P R", "S P Y",
    "S T R", "S T Y",
    "S M Y",
];

/// Check whether a space-joined consonant sequence is a recognized cluster.
///
/// Matching is exact and case-sensitive.
pub fn is_consonant_cluster(sequence: &str) -> bool {
    CONSONANT_CLUSTERS.contains(&sequence)
}
