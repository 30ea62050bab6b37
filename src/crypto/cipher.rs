//! AEAD ciphers behind the payload format
//!
//! All three algorithms take a 256-bit key and a 96-bit nonce and
//! authenticate the ciphertext, so tampering or a wrong-password key is
//! always detected at decryption time.

use crate::error::{OpskitError, Result};
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::Aes256Gcm;
use aes_gcm_siv::Aes256GcmSiv;
use chacha20poly1305::ChaCha20Poly1305;
use clap::ValueEnum;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

pub const NONCE_LEN: usize = 12;

/// Supported authenticated encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum CipherAlgorithm {
    /// NIST-standard AES in Galois/Counter Mode
    #[serde(rename = "aes-256-gcm")]
    #[value(name = "aes-256-gcm")]
    Aes256Gcm,

    /// Fast on hardware without AES acceleration
    #[serde(rename = "chacha20-poly1305")]
    #[value(name = "chacha20-poly1305")]
    ChaCha20Poly1305,

    /// Nonce-misuse-resistant AES-GCM variant
    #[serde(rename = "aes-256-gcm-siv")]
    #[value(name = "aes-256-gcm-siv")]
    Aes256GcmSiv,
}

impl CipherAlgorithm {
    pub fn label(&self) -> &'static str {
        match self {
            CipherAlgorithm::Aes256Gcm => "aes-256-gcm",
            CipherAlgorithm::ChaCha20Poly1305 => "chacha20-poly1305",
            CipherAlgorithm::Aes256GcmSiv => "aes-256-gcm-siv",
        }
    }

    pub fn encrypt(&self, key: &[u8; 32], nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
        let result = match self {
            CipherAlgorithm::Aes256Gcm => Aes256Gcm::new_from_slice(key)
                .map_err(|e| OpskitError::crypto(e.to_string()))?
                .encrypt(aes_gcm::Nonce::from_slice(nonce), plaintext),
            CipherAlgorithm::ChaCha20Poly1305 => ChaCha20Poly1305::new_from_slice(key)
                .map_err(|e| OpskitError::crypto(e.to_string()))?
                .encrypt(chacha20poly1305::Nonce::from_slice(nonce), plaintext),
            CipherAlgorithm::Aes256GcmSiv => Aes256GcmSiv::new_from_slice(key)
                .map_err(|e| OpskitError::crypto(e.to_string()))?
                .encrypt(aes_gcm_siv::Nonce::from_slice(nonce), plaintext),
        };
        result.map_err(|_| OpskitError::crypto("encryption failed"))
    }

    /// Decrypt and authenticate; any failure is reported as a wrong
    /// password, never as partial plaintext
    pub fn decrypt(&self, key: &[u8; 32], nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let result = match self {
            CipherAlgorithm::Aes256Gcm => Aes256Gcm::new_from_slice(key)
                .map_err(|e| OpskitError::crypto(e.to_string()))?
                .decrypt(aes_gcm::Nonce::from_slice(nonce), ciphertext),
            CipherAlgorithm::ChaCha20Poly1305 => ChaCha20Poly1305::new_from_slice(key)
                .map_err(|e| OpskitError::crypto(e.to_string()))?
                .decrypt(chacha20poly1305::Nonce::from_slice(nonce), ciphertext),
            CipherAlgorithm::Aes256GcmSiv => Aes256GcmSiv::new_from_slice(key)
                .map_err(|e| OpskitError::crypto(e.to_string()))?
                .decrypt(aes_gcm_siv::Nonce::from_slice(nonce), ciphertext),
        };
        result.map_err(|_| OpskitError::Authentication)
    }

    /// Rows for the `encrypt algorithms` table: (name, KDF, notes)
    pub fn catalogue() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            (
                "aes-256-gcm",
                "PBKDF2-SHA256 (480k iterations)",
                "Default. NIST standard, authenticated encryption",
            ),
            (
                "chacha20-poly1305",
                "PBKDF2-SHA256 (480k iterations)",
                "Fast on devices without AES hardware acceleration",
            ),
            (
                "aes-256-gcm-siv",
                "PBKDF2-SHA256 (480k iterations)",
                "Misuse-resistant mode, tolerates nonce reuse",
            ),
        ]
    }
}

/// Generate a random nonce from the OS CSPRNG
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_algorithms() {
        let key = [42u8; 32];
        let nonce = generate_nonce();
        for algorithm in [
            CipherAlgorithm::Aes256Gcm,
            CipherAlgorithm::ChaCha20Poly1305,
            CipherAlgorithm::Aes256GcmSiv,
        ] {
            let ciphertext = algorithm.encrypt(&key, &nonce, b"secret message").unwrap();
            assert_ne!(ciphertext, b"secret message");
            let plaintext = algorithm.decrypt(&key, &nonce, &ciphertext).unwrap();
            assert_eq!(plaintext, b"secret message");
        }
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let nonce = generate_nonce();
        let ciphertext = CipherAlgorithm::Aes256Gcm
            .encrypt(&[1u8; 32], &nonce, b"data")
            .unwrap();
        let result = CipherAlgorithm::Aes256Gcm.decrypt(&[2u8; 32], &nonce, &ciphertext);
        assert!(matches!(result, Err(OpskitError::Authentication)));
    }

    #[test]
    fn tampered_ciphertext_fails_authentication() {
        let key = [9u8; 32];
        let nonce = generate_nonce();
        let mut ciphertext = CipherAlgorithm::ChaCha20Poly1305
            .encrypt(&key, &nonce, b"data")
            .unwrap();
        ciphertext[0] ^= 0xff;
        let result = CipherAlgorithm::ChaCha20Poly1305.decrypt(&key, &nonce, &ciphertext);
        assert!(matches!(result, Err(OpskitError::Authentication)));
    }
}
