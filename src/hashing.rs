//! Hash digests and HMACs over the supported algorithm set

use crate::error::{OpskitError, Result};
use blake2::{Blake2b512, Blake2s256};
use clap::ValueEnum;
use hmac::digest::KeyInit;
use hmac::{Mac, SimpleHmac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use subtle::ConstantTimeEq;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Blake2b,
    Blake2s,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha512 => "SHA512",
            HashAlgorithm::Blake2b => "BLAKE2B",
            HashAlgorithm::Blake2s => "BLAKE2S",
        }
    }
}

/// Lowercase hex digest of `data`
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> String {
    let bytes = match algorithm {
        HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
        HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        HashAlgorithm::Blake2b => Blake2b512::digest(data).to_vec(),
        HashAlgorithm::Blake2s => Blake2s256::digest(data).to_vec(),
    };
    hex::encode(bytes)
}

/// Lowercase hex HMAC of `data` under `key`
pub fn hmac(algorithm: HashAlgorithm, key: &[u8], data: &[u8]) -> Result<String> {
    let bytes = match algorithm {
        HashAlgorithm::Md5 => hmac_bytes::<SimpleHmac<Md5>>(key, data)?,
        HashAlgorithm::Sha1 => hmac_bytes::<SimpleHmac<Sha1>>(key, data)?,
        HashAlgorithm::Sha256 => hmac_bytes::<SimpleHmac<Sha256>>(key, data)?,
        HashAlgorithm::Sha512 => hmac_bytes::<SimpleHmac<Sha512>>(key, data)?,
        HashAlgorithm::Blake2b => hmac_bytes::<SimpleHmac<Blake2b512>>(key, data)?,
        HashAlgorithm::Blake2s => hmac_bytes::<SimpleHmac<Blake2s256>>(key, data)?,
    };
    Ok(hex::encode(bytes))
}

fn hmac_bytes<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|e| OpskitError::crypto(format!("invalid HMAC key: {e}")))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Case-insensitive, constant-time comparison of two hex digests
pub fn digests_match(expected: &str, actual: &str) -> bool {
    let expected = expected.trim().to_ascii_lowercase();
    let actual = actual.trim().to_ascii_lowercase();
    if expected.len() != actual.len() {
        return false;
    }
    expected.as_bytes().ct_eq(actual.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            digest(HashAlgorithm::Sha256, b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn known_digests_of_hello() {
        assert_eq!(
            digest(HashAlgorithm::Md5, b"hello"),
            "5d41402abc4b2a76b9719d911017c592"
        );
        assert_eq!(
            digest(HashAlgorithm::Sha1, b"hello"),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
        assert_eq!(
            digest(HashAlgorithm::Sha256, b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn digest_lengths() {
        assert_eq!(digest(HashAlgorithm::Sha512, b"x").len(), 128);
        assert_eq!(digest(HashAlgorithm::Blake2b, b"x").len(), 128);
        assert_eq!(digest(HashAlgorithm::Blake2s, b"x").len(), 64);
    }

    #[test]
    fn hmac_sha256_test_vector() {
        let tag = hmac(
            HashAlgorithm::Sha256,
            b"key",
            b"The quick brown fox jumps over the lazy dog",
        )
        .unwrap();
        assert_eq!(
            tag,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn hmac_works_for_every_algorithm() {
        for algorithm in HashAlgorithm::ALL {
            let tag = hmac(algorithm, b"secret", b"payload").unwrap();
            assert!(!tag.is_empty());
            assert!(tag.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn digest_comparison_ignores_case() {
        let actual = digest(HashAlgorithm::Sha256, b"hello");
        assert!(digests_match(&actual.to_uppercase(), &actual));
        assert!(!digests_match("deadbeef", &actual));
    }
}
