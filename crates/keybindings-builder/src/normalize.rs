//! Key combination normalization
//!
//! Two key strings are equivalent when they name the same chords in the same
//! order, ignoring case, surrounding whitespace and the order of `+` tokens
//! inside each chord.

/// Split a key string into its space-separated chords
///
/// Whitespace next to a `+` belongs to the chord, so `"ctrl + p"` is a
/// single chord while `"ctrl+k ctrl+s"` is two.
pub(crate) fn split_chords(key: &str) -> Vec<String> {
    let mut chords: Vec<String> = Vec::new();
    for piece in key.split_whitespace() {
        match chords.last_mut() {
            Some(last) if last.ends_with('+') || piece.starts_with('+') => last.push_str(piece),
            _ => chords.push(piece.to_string()),
        }
    }
    chords
}

/// Canonical comparison form of a key combination
pub fn normalize_key(key: &str) -> String {
    split_chords(&key.to_lowercase())
        .iter()
        .map(|chord| {
            let mut tokens: Vec<&str> = chord.split('+').collect();
            tokens.sort_unstable();
            tokens.join("+")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether two key strings denote the same key combination
pub fn are_keys_equivalent(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}
