//! API key fingerprinting for operational visibility.
//!
//! Operators can confirm which credential a deployment picked up by comparing
//! the logged fingerprint, without the key itself ever reaching the logs.

use sha2::{Digest, Sha256};

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Generate a truncated SHA-256 fingerprint of an API key.
///
/// Returns the first 8 bytes of the SHA-256 hash as a 16-character lowercase
/// hex string.
///
/// # Examples
///
/// ```rust
/// use roster::outbound::learning_platform::api_key_fingerprint;
///
/// let fp = api_key_fingerprint("secret-key");
///
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn api_key_fingerprint(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..FINGERPRINT_BYTES])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fingerprint_is_deterministic() {
        assert_eq!(api_key_fingerprint("alpha"), api_key_fingerprint("alpha"));
    }

    #[rstest]
    fn fingerprint_is_lowercase_hex_of_fixed_length() {
        let fp = api_key_fingerprint("alpha");

        assert_eq!(fp.len(), FINGERPRINT_BYTES * 2);
        assert_eq!(fp, fp.to_lowercase());
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[rstest]
    fn different_keys_produce_different_fingerprints() {
        assert_ne!(api_key_fingerprint("alpha"), api_key_fingerprint("beta"));
    }

    #[rstest]
    fn fingerprint_does_not_contain_the_key() {
        let key = "abcdef0123456789";
        assert!(!api_key_fingerprint(key).contains(key));
    }
}
