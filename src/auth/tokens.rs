//! Opaque bearer token generation
//!
//! Tokens are random Crockford Base32 strings: no ambiguous characters
//! (excludes I, L, O, U), case-insensitive, easy to paste into a header.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// 40 characters of Base32 = 200 bits of entropy
pub const TOKEN_LENGTH: usize = 40;

/// Generate a new opaque bearer token
pub fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_length() {
        assert_eq!(generate_token().len(), TOKEN_LENGTH);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let token = generate_token();
        for c in token.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }
        assert!(!token.contains('I'));
        assert!(!token.contains('L'));
        assert!(!token.contains('O'));
        assert!(!token.contains('U'));
    }

    #[test]
    fn test_uniqueness() {
        let mut tokens = HashSet::new();
        for _ in 0..1000 {
            assert!(tokens.insert(generate_token()), "Duplicate token generated");
        }
    }
}
