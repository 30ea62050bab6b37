//! End-to-end tests for the uuid, jwt, password and version subcommands

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use uuid::Uuid;

// The classic HS256 sample token: sub=1234567890, name=John Doe, iat=1516239022
const SAMPLE_JWT: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

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

fn extract_uuids(text: &str) -> Vec<Uuid> {
    text.split_whitespace()
        .filter_map(|token| Uuid::parse_str(token).ok())
        .collect()
}

#[test]
fn test_uuid_v4_generation() {
    let output = run(&["uuid", "generate", "-c", "3"]);
    assert!(output.status.success());
    let ids = extract_uuids(&stdout(&output));
    assert_eq!(ids.len(), 3);
    for id in &ids {
        assert_eq!(id.get_version_num(), 4);
    }
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
}

#[test]
fn test_uuid_v1_generation() {
    let output = run(&["uuid", "generate", "-v", "1"]);
    assert!(output.status.success());
    let ids = extract_uuids(&stdout(&output));
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].get_version_num(), 1);
}

#[test]
fn test_uuid_v5_is_deterministic() {
    // RFC 4122 value for example.com under the DNS namespace
    let output = run(&["uuid", "generate", "-v", "5", "-n", "example.com"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("cfbff0d1-9375-5685-968c-48ce8b15ae17"));
}

#[test]
fn test_uuid_v5_url_namespace_differs() {
    let output = run(&[
        "uuid", "generate", "-v", "5", "-n", "example.com", "--namespace", "url",
    ]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("cfbff0d1-9375-5685-968c-48ce8b15ae17"));
}

#[test]
fn test_uuid_v5_literal_namespace() {
    // A custom namespace UUID gives a different, but stable, result
    let args = [
        "uuid",
        "generate",
        "-v",
        "5",
        "-n",
        "example.com",
        "--namespace",
        "6ba7b810-9dad-11d1-80b4-00c04fd430c8", // the DNS namespace, spelled out
    ];
    let output = run(&args);
    assert!(output.status.success());
    assert!(stdout(&output).contains("cfbff0d1-9375-5685-968c-48ce8b15ae17"));
}

#[test]
fn test_uuid_bad_namespace_is_rejected() {
    let output = run(&[
        "uuid", "generate", "-v", "5", "-n", "x", "--namespace", "not-a-namespace",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("dns, url, oid, x500"));
}

#[test]
fn test_uuid_upper_flag() {
    let output = run(&["uuid", "generate", "-v", "5", "-n", "example.com", "-u"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("CFBFF0D1-9375-5685-968C-48CE8B15AE17"));
}

#[test]
fn test_uuid_v5_requires_name() {
    let output = run(&["uuid", "generate", "-v", "5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--name"));
}

#[test]
fn test_uuid_unsupported_version() {
    let output = run(&["uuid", "generate", "-v", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported UUID version"));
}

#[test]
fn test_jwt_decode_sample_token() {
    let output = run(&["jwt", "decode", SAMPLE_JWT]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("HS256"));
    assert!(text.contains("John Doe"));
    assert!(text.contains("1234567890"));
    assert!(text.contains("unverified"));
    assert!(text.contains("2018-01-18"), "iat not rendered: {}", text);
    assert!(text.contains("Present (43 chars, not verified)"));
}

#[test]
fn test_jwt_decode_from_stdin() {
    let mut child = Command::new(opskit_bin())
        .args(["jwt", "decode"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn");
    child
        .stdin
        .as_mut()
        .expect("stdin handle")
        .write_all(SAMPLE_JWT.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("Failed to wait");
    assert!(output.status.success());
    assert!(stdout(&output).contains("John Doe"));
}

#[test]
fn test_jwt_two_segments_has_no_signature() {
    let unsigned: String = SAMPLE_JWT.rsplit_once('.').map(|(head, _)| head.to_string()).unwrap();
    let output = run(&["jwt", "decode", &unsigned]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("None (0 chars"));
}

#[test]
fn test_jwt_one_segment_fails() {
    let output = run(&["jwt", "decode", "eyJhbGciOiJIUzI1NiJ9"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("2 or 3 segments"));
}

#[test]
fn test_password_generate_table() {
    let output = run(&["password", "generate", "-c", "2"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Generated Passwords"));
    assert!(text.contains("Excellent"));
    assert!(text.contains("Entropy:"));
}

#[test]
fn test_short_password_is_weak() {
    let output = run(&["password", "generate", "-l", "8"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Weak"));
}

#[test]
fn test_password_empty_charset_fails() {
    let output = run(&[
        "password",
        "generate",
        "--no-uppercase",
        "--no-lowercase",
        "--no-digits",
        "--no-symbols",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no characters available"));
}

#[test]
fn test_passphrase_entropy_note() {
    let output = run(&["password", "passphrase", "-w", "5"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Generated Passphrases"));
    assert!(text.contains("word pool"));
}

#[test]
fn test_version_panel() {
    let output = run(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(concat!("opskit v", env!("CARGO_PKG_VERSION"))));
}
