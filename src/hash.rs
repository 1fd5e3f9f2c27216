//! BLAKE3 hashing for the client cache-busting token
//!
//! The token is derived from the application version, the runtime readiness
//! level and the minifier's own token. Clients only use it as a cache key, so
//! the encoding is a short hex prefix of the digest rather than the full hash.

use blake3::Hasher;

/// Separator placed between the inputs before hashing
pub const CACHE_BUSTER_SEPARATOR: char = '.';

/// Number of hex characters kept from the digest
pub const CACHE_BUSTER_LEN: usize = 16;

/// Compute the cache buster token for the given inputs.
///
/// Deterministic across processes: the same `(version, level, minifier)`
/// triple always yields the same token.
pub fn cache_buster(version: &str, readiness_level: &str, minifier_token: &str) -> String {
    let joined = format!(
        "{version}{sep}{readiness_level}{sep}{minifier_token}",
        sep = CACHE_BUSTER_SEPARATOR
    );

    let mut hasher = Hasher::new();
    hasher.update(joined.as_bytes());
    let hex = hasher.finalize().to_hex();

    hex[..CACHE_BUSTER_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_buster_deterministic() {
        let first = cache_buster("10.1.0", "Run", "abc123");
        let second = cache_buster("10.1.0", "Run", "abc123");
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_buster_matches_joined_digest() {
        let expected = blake3::hash(b"10.1.0.Run.abc123").to_hex();
        assert_eq!(
            cache_buster("10.1.0", "Run", "abc123"),
            &expected[..CACHE_BUSTER_LEN]
        );
    }

    #[test]
    fn test_cache_buster_changes_with_minifier_token() {
        assert_ne!(
            cache_buster("10.1.0", "Run", "abc123"),
            cache_buster("10.1.0", "Run", "abc124")
        );
    }

    #[test]
    fn test_cache_buster_changes_with_each_input() {
        let base = cache_buster("10.1.0", "Run", "abc123");
        assert_ne!(base, cache_buster("10.1.1", "Run", "abc123"));
        assert_ne!(base, cache_buster("10.1.0", "Upgrade", "abc123"));
        assert_ne!(base, cache_buster("10.1.0", "Run", ""));
    }

    #[test]
    fn test_cache_buster_shape() {
        let token = cache_buster("", "", "");
        assert_eq!(token.len(), CACHE_BUSTER_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
