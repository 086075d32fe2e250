//! Card key generation.
//!
//! Keys are bearer secrets, so the random part is drawn from the operating
//! system CSPRNG rather than a seeded generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

/// Symbols the random part of a key is drawn from.
pub const KEY_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of the random part of a key.
pub const DEFAULT_KEY_LENGTH: usize = 16;

/// Longest random part an issued key may have.
pub const MAX_KEY_LENGTH: usize = 64;

/// Generate `"{prefix}-{random}"` with `length` random symbols.
#[must_use]
pub fn generate_key(prefix: &str, length: usize) -> String {
    let mut rng = OsRng;
    let random: String = (0..length)
        .filter_map(|_| KEY_ALPHABET.choose(&mut rng))
        .map(|&symbol| char::from(symbol))
        .collect();
    format!("{prefix}-{random}")
}

/// Number of distinct random parts of `length` symbols, saturating at `usize::MAX`.
#[must_use]
pub fn key_space(length: usize) -> usize {
    let exponent = u32::try_from(length).unwrap_or(u32::MAX);
    KEY_ALPHABET.len().saturating_pow(exponent)
}

/// Whether `key` has the shape `generate_key(prefix, length)` produces.
#[must_use]
pub fn has_key_shape(key: &str, prefix: &str, length: usize) -> bool {
    key.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|random| {
            random.len() == length && random.bytes().all(|b| KEY_ALPHABET.contains(&b))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_has_prefix_and_length() {
        let key = generate_key("VIP", DEFAULT_KEY_LENGTH);
        assert!(key.starts_with("VIP-"));
        assert_eq!(key.len(), "VIP".len() + 1 + DEFAULT_KEY_LENGTH);
    }

    #[test]
    fn key_uses_alphabet_only() {
        let key = generate_key("X", 256);
        assert!(key[2..].bytes().all(|b| KEY_ALPHABET.contains(&b)));
    }

    #[test]
    fn custom_length() {
        assert_eq!(generate_key("AB", 4).len(), 7);
        assert_eq!(generate_key("AB", 0), "AB-");
    }

    #[test]
    fn keys_do_not_repeat() {
        let keys: HashSet<_> = (0..1_000).map(|_| generate_key("VIP", 16)).collect();
        assert_eq!(keys.len(), 1_000);
    }

    #[test]
    fn key_space_saturates() {
        assert_eq!(key_space(1), 36);
        assert_eq!(key_space(2), 1296);
        assert_eq!(key_space(MAX_KEY_LENGTH), usize::MAX);
    }

    #[test]
    fn key_shape_matches_generated_keys() {
        let key = generate_key("VIP", 4);
        assert!(has_key_shape(&key, "VIP", 4));
        assert!(!has_key_shape(&key, "VIP", 5));
        assert!(!has_key_shape(&key, "VI", 4));
        assert!(!has_key_shape("VIP-abcd", "VIP", 4));
    }
}
