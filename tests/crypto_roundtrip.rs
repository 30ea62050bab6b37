use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use opskit::crypto::{self, CipherAlgorithm};
use opskit::OpskitError;

const ALGORITHMS: [CipherAlgorithm; 3] = [
    CipherAlgorithm::Aes256Gcm,
    CipherAlgorithm::ChaCha20Poly1305,
    CipherAlgorithm::Aes256GcmSiv,
];

#[test]
fn test_roundtrip_all_algorithms() {
    let plaintext = b"the quick brown fox, \x00\xff binary too";
    for algorithm in ALGORITHMS {
        let token = crypto::seal(plaintext, "hunter2", algorithm).unwrap();
        let recovered = crypto::open(&token, "hunter2").unwrap();
        assert_eq!(recovered, plaintext, "roundtrip failed for {:?}", algorithm);
    }
}

#[test]
fn test_roundtrip_empty_plaintext() {
    let token = crypto::seal(b"", "pw", CipherAlgorithm::Aes256Gcm).unwrap();
    assert_eq!(crypto::open(&token, "pw").unwrap(), b"");
}

#[test]
fn test_wrong_password_is_authentication_error() {
    for algorithm in ALGORITHMS {
        let token = crypto::seal(b"secret", "right", algorithm).unwrap();
        let result = crypto::open(&token, "wrong");
        assert!(
            matches!(result, Err(OpskitError::Authentication)),
            "expected authentication failure for {:?}",
            algorithm
        );
    }
}

#[test]
fn test_tampered_ciphertext_is_rejected() {
    let token = crypto::seal(b"secret", "pw", CipherAlgorithm::Aes256Gcm).unwrap();

    let mut envelope: serde_json::Value =
        serde_json::from_slice(&STANDARD.decode(&token).unwrap()).unwrap();
    let mut data = STANDARD
        .decode(envelope["data"].as_str().unwrap())
        .unwrap();
    data[0] ^= 0x01;
    envelope["data"] = serde_json::Value::String(STANDARD.encode(&data));
    let tampered = STANDARD.encode(serde_json::to_vec(&envelope).unwrap());

    assert!(matches!(
        crypto::open(&tampered, "pw"),
        Err(OpskitError::Authentication)
    ));
}

#[test]
fn test_envelope_is_self_describing() {
    let token = crypto::seal(b"payload", "pw", CipherAlgorithm::ChaCha20Poly1305).unwrap();
    let envelope: serde_json::Value =
        serde_json::from_slice(&STANDARD.decode(&token).unwrap()).unwrap();

    assert_eq!(envelope["alg"], "chacha20-poly1305");
    // 16-byte salt, 12-byte nonce
    assert_eq!(STANDARD.decode(envelope["salt"].as_str().unwrap()).unwrap().len(), 16);
    assert_eq!(STANDARD.decode(envelope["nonce"].as_str().unwrap()).unwrap().len(), 12);
    assert!(envelope["data"].is_string());
}

#[test]
fn test_salts_are_unique_per_encryption() {
    let first = crypto::seal(b"same", "pw", CipherAlgorithm::Aes256Gcm).unwrap();
    let second = crypto::seal(b"same", "pw", CipherAlgorithm::Aes256Gcm).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_garbage_token_is_not_authentication_error() {
    // Structurally invalid input is a decode problem, not a key problem
    let result = crypto::open("not base64 at all!!", "pw");
    assert!(matches!(result, Err(OpskitError::Decode { .. })));
}
