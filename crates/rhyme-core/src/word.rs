// Dictionary word-token normalization
//
// Dictionary files mark homograph variants as `WORD(2)`, `WORD(3)`, ...
// Lookups are always done on the lowercased base word. Parentheses that are
// not a trailing numeric suffix belong to the word itself (`(PAREN`).

/// Split `WORD(n)` into `("WORD", n)`.
///
/// Returns `None` unless the token ends in `(digits)` after a non-empty base.
fn split_variant(token: &str) -> Option<(&str, u32)> {
    let inner = token.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let (base, digits) = (&inner[..open], &inner[open + 1..]);
    if base.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((base, digits.parse().ok()?))
}

/// Strip a trailing `(n)` variant suffix and lowercase the remainder.
///
/// `"READ(2)"` becomes `"read"`; `"(PAREN"` becomes `"(paren"`.
pub fn normalize_word(token: &str) -> String {
    let base = split_variant(token).map_or(token, |(base, _)| base);
    base.trim().to_lowercase()
}

/// Returns the variant index of a token: `n` for `WORD(n)`, otherwise `1`.
///
/// A token ending in a parenthesized group that is not a number, such as
/// `WORD(x)`, yields `None`.
pub fn variant_index(token: &str) -> Option<u32> {
    if let Some((_, n)) = split_variant(token) {
        return Some(n);
    }
    let looks_like_variant = token
        .strip_suffix(')')
        .and_then(|inner| inner.rfind('('))
        .is_some_and(|open| open > 0);
    if looks_like_variant { None } else { Some(1) }
}
