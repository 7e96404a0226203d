//! Random alias generation.
//!
//! Aliases are drawn from `[A-Za-z0-9]` using the thread-local RNG. The
//! generator does not check uniqueness; the store's unique constraint does.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of aliases generated when the caller does not supply one.
pub const ALIAS_LENGTH: usize = 6;

/// Generates a random alphanumeric alias of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(ALIAS_LENGTH);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
