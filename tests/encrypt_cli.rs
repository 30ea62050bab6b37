//! End-to-end tests for the encrypt subcommand

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

fn opskit_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_opskit"))
}

fn run(args: &[&str]) -> Output {
    Command::new(opskit_bin())
        .args(args)
        .output()
        .expect("Failed to execute")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_enc_dec_roundtrip() {
    let encrypted = run(&["encrypt", "enc", "secret data", "-p", "pw"]);
    assert!(encrypted.status.success());
    let token = stdout(&encrypted).trim().to_string();
    assert!(!token.contains("secret data"));

    let decrypted = run(&["encrypt", "dec", &token, "-p", "pw"]);
    assert!(decrypted.status.success());
    assert_eq!(stdout(&decrypted).trim(), "secret data");
}

#[test]
fn test_roundtrip_with_all_algorithms() {
    for algorithm in ["aes-256-gcm", "chacha20-poly1305", "aes-256-gcm-siv"] {
        let encrypted = run(&["encrypt", "enc", "payload", "-p", "pw", "-a", algorithm]);
        assert!(encrypted.status.success(), "enc failed for {}", algorithm);
        let token = stdout(&encrypted).trim().to_string();

        let decrypted = run(&["encrypt", "dec", &token, "-p", "pw"]);
        assert!(decrypted.status.success(), "dec failed for {}", algorithm);
        assert_eq!(stdout(&decrypted).trim(), "payload");
    }
}

#[test]
fn test_wrong_password_fails() {
    let encrypted = run(&["encrypt", "enc", "secret", "-p", "right"]);
    let token = stdout(&encrypted).trim().to_string();

    let decrypted = run(&["encrypt", "dec", &token, "-p", "wrong"]);
    assert_eq!(decrypted.status.code(), Some(1));
    let text = String::from_utf8_lossy(&decrypted.stderr);
    assert!(text.contains("Decryption failed"), "got: {}", text);
    assert!(stdout(&decrypted).is_empty(), "must not emit partial plaintext");
}

#[test]
fn test_garbage_token_fails_cleanly() {
    let output = run(&["encrypt", "dec", "definitely-not-a-token", "-p", "pw"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Decode error"));
}

#[test]
fn test_file_roundtrip_with_output() {
    let mut plain = tempfile::NamedTempFile::new().unwrap();
    plain.write_all(b"file contents\nwith lines\n").unwrap();
    let sealed = tempfile::NamedTempFile::new().unwrap();
    let opened = tempfile::NamedTempFile::new().unwrap();

    let enc = run(&[
        "encrypt",
        "enc",
        "-f",
        plain.path().to_str().unwrap(),
        "-p",
        "pw",
        "--output",
        sealed.path().to_str().unwrap(),
    ]);
    assert!(enc.status.success());

    let dec = run(&[
        "encrypt",
        "dec",
        "-f",
        sealed.path().to_str().unwrap(),
        "-p",
        "pw",
        "--output",
        opened.path().to_str().unwrap(),
    ]);
    assert!(dec.status.success());
    assert_eq!(
        std::fs::read(opened.path()).unwrap(),
        b"file contents\nwith lines\n"
    );
}

#[test]
fn test_algorithms_table() {
    let output = run(&["encrypt", "algorithms"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["aes-256-gcm", "chacha20-poly1305", "aes-256-gcm-siv"] {
        assert!(text.contains(name), "missing algorithm {}", name);
    }
    assert!(text.contains("PBKDF2"));
}
