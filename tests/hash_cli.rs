//! End-to-end tests for the hash subcommand

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const SHA256_HELLO: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

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
fn test_sha256_known_vector() {
    let output = run(&["hash", "generate", "hello"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), SHA256_HELLO);
}

#[test]
fn test_md5_known_vector() {
    let output = run(&["hash", "generate", "hello", "--algo", "md5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "5d41402abc4b2a76b9719d911017c592");
}

#[test]
fn test_all_digests_of_empty_input() {
    // Empty stdin, no argument
    let mut child = Command::new(opskit_bin())
        .args(["hash", "generate", "--all"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn");
    child.stdin.take().expect("stdin handle");
    let output = child.wait_with_output().expect("Failed to wait");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(SHA256_EMPTY));
    // Empty-input MD5 and SHA-1
    assert!(text.contains("d41d8cd98f00b204e9800998ecf8427e"));
    assert!(text.contains("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
    for label in ["MD5", "SHA1", "SHA256", "SHA512", "BLAKE2B", "BLAKE2S"] {
        assert!(text.contains(label), "missing {} row", label);
    }
}

#[test]
fn test_upper_flag() {
    let output = run(&["hash", "generate", "hello", "-u"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), SHA256_HELLO.to_uppercase());
}

#[test]
fn test_hash_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello").unwrap();
    let output = run(&["hash", "generate", "-f", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), SHA256_HELLO);
}

#[test]
fn test_hmac_sha256_known_vector() {
    let output = run(&[
        "hash",
        "hmac",
        "-k",
        "key",
        "The quick brown fox jumps over the lazy dog",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
    );
}

#[test]
fn test_verify_match_is_case_insensitive() {
    let upper = SHA256_HELLO.to_uppercase();
    let output = run(&["hash", "verify", "hello", "-e", &upper]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Hash matches (SHA256)"));
}

#[test]
fn test_verify_mismatch_exits_one() {
    let output = run(&["hash", "verify", "hello", "-e", SHA256_EMPTY]);
    assert_eq!(output.status.code(), Some(1));
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(text.contains("Hash mismatch"));
    assert!(text.contains("Expected:"));
    assert!(text.contains("Actual:"));
}
