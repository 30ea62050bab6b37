//! Self-describing encrypted payload format
//!
//! A sealed payload is a base64-wrapped JSON object carrying the
//! algorithm identifier, salt, nonce, and ciphertext. Decryption reads
//! the algorithm from the payload itself, so `dec` never needs an
//! algorithm flag and old payloads keep working when the default
//! changes.

use crate::crypto::cipher::{self, CipherAlgorithm, NONCE_LEN};
use crate::crypto::kdf::{self, SALT_LEN};
use crate::error::{OpskitError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct Envelope {
    alg: CipherAlgorithm,
    salt: String,
    nonce: String,
    data: String,
}

/// Encrypt plaintext under a password, producing a transportable token
pub fn seal(plaintext: &[u8], password: &str, algorithm: CipherAlgorithm) -> Result<String> {
    let salt = kdf::generate_salt();
    let key = kdf::derive_key(password, &salt);
    let nonce = cipher::generate_nonce();
    let ciphertext = algorithm.encrypt(&key, &nonce, plaintext)?;

    let envelope = Envelope {
        alg: algorithm,
        salt: STANDARD.encode(salt),
        nonce: STANDARD.encode(nonce),
        data: STANDARD.encode(ciphertext),
    };
    let json = serde_json::to_vec(&envelope)
        .map_err(|e| OpskitError::crypto(format!("payload serialization failed: {}", e)))?;
    Ok(STANDARD.encode(json))
}

/// Decrypt a token produced by [`seal`]
pub fn open(token: &str, password: &str) -> Result<Vec<u8>> {
    let json = STANDARD
        .decode(token.trim())
        .map_err(|_| OpskitError::decode("invalid encrypted data format"))?;
    let envelope: Envelope = serde_json::from_slice(&json)
        .map_err(|_| OpskitError::decode("invalid encrypted data format"))?;

    let salt = decode_field(&envelope.salt, "salt")?;
    if salt.len() != SALT_LEN {
        return Err(OpskitError::decode("invalid encrypted data format"));
    }
    let nonce: [u8; NONCE_LEN] = decode_field(&envelope.nonce, "nonce")?
        .try_into()
        .map_err(|_| OpskitError::decode("invalid encrypted data format"))?;
    let ciphertext = decode_field(&envelope.data, "data")?;

    let key = kdf::derive_key(password, &salt);
    envelope.alg.decrypt(&key, &nonce, &ciphertext)
}

fn decode_field(value: &str, field: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|_| OpskitError::decode(format!("invalid {} in encrypted payload", field)))
}
