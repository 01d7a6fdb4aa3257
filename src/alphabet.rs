/// Index symbols in trie child order: `a..z`, then the end-of-word marker.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz$";
pub const SYMBOLS: usize = ALPHABET.len();

/// End-of-word marker appended to every term before rotation.
pub const EOW: char = '$';
/// Wildcard symbol in query patterns. Never a valid index symbol.
pub const WILDCARD: char = '*';

/// Maps a character to its child slot, or `None` for anything outside the
/// 27-symbol alphabet (including `*`).
pub fn symbol_index(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        EOW => Some(SYMBOLS - 1),
        _ => None,
    }
}

/// Inverse of `symbol_index`, for diagnostics.
pub fn symbol_at(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Case folding happens here, in the callers; the trie itself rejects
/// anything `symbol_index` doesn't know.
pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_in_order() {
        assert_eq!(symbol_index('a'), Some(0));
        assert_eq!(symbol_index('z'), Some(25));
        assert_eq!(symbol_index(EOW), Some(26));
        for (i, &b) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_index(b as char), Some(i));
            assert_eq!(symbol_at(i), b as char);
        }
    }

    #[test]
    fn foreign_characters_have_no_slot() {
        for c in ['A', 'Z', '0', '9', ' ', '-', WILDCARD, 'é'] {
            assert_eq!(symbol_index(c), None);
        }
    }

    #[test]
    fn normalize_lowercases_only() {
        assert_eq!(normalize("AbBey"), "abbey");
        assert_eq!(normalize("ab*"), "ab*");
        assert_eq!(normalize("ab3"), "ab3");
    }
}
