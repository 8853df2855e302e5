//! Random alias generation.
//!
//! Aliases are drawn uniformly from `[a-zA-Z0-9]`. Generation never checks
//! for collisions; uniqueness is enforced by the store and a collision
//! surfaces as `AliasExists` on the subsequent save.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of aliases generated when the caller does not supply one.
pub const ALIAS_LENGTH: usize = 10;

/// Symbols an alias is drawn from (62 characters).
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random alias of exactly `length` characters.
///
/// Each call seeds its own generator from operating-system entropy, so
/// concurrent callers never share generator state.
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::alias_generator::generate;
///
/// let alias = generate(10);
/// assert_eq!(alias.len(), 10);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate(length: usize) -> String {
    let mut rng = StdRng::from_os_rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
