//! End-to-end tests for the cron subcommand

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
fn test_explain_business_hours() {
    let output = run(&["cron", "explain", "*/5 9-17 * * 1-5"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(
        text.contains("Every 5 minutes during hours 9 through 17 on Monday through Friday"),
        "summary missing, got: {}",
        text
    );
    // Field breakdown table
    assert!(text.contains("Minute"));
    assert!(text.contains("Day (Week)"));
}

#[test]
fn test_explain_out_of_range_minute_fails() {
    let output = run(&["cron", "explain", "99 * * * *"]);
    assert_eq!(output.status.code(), Some(1));
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(text.contains("Parse error"), "got: {}", text);
    assert!(text.contains("minute"));
}

#[test]
fn test_explain_wrong_field_count_fails() {
    let output = run(&["cron", "explain", "* * *"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("5 fields"));
}

#[test]
fn test_explain_special_shortcut() {
    let output = run(&["cron", "explain", "@daily"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Run once a day"));
}

#[test]
fn test_explain_next_fire_times() {
    let output = run(&["cron", "explain", "0 0 * * *", "--next", "3"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Next fire times (UTC):"));
    // Three midnights
    assert_eq!(text.matches(" 00:00").count(), 3, "got: {}", text);
}

#[test]
fn test_generate_from_preset() {
    let output = run(&["cron", "generate", "daily-9am"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("0 9 * * *"));
}

#[test]
fn test_generate_unknown_preset_fails() {
    let output = run(&["cron", "generate", "every-fortnight"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown preset"));
}

#[test]
fn test_generate_preset_rejects_field_flags() {
    let output = run(&["cron", "generate", "daily", "-m", "30"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be combined"));
}

#[test]
fn test_generate_custom_fields() {
    let output = run(&["cron", "generate", "-m", "30", "-H", "2", "-w", "1-5"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("30 2 * * 1-5"));
}

#[test]
fn test_generate_validates_custom_fields() {
    let output = run(&["cron", "generate", "-m", "75"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("minute"));
}

#[test]
fn test_presets_table() {
    let output = run(&["cron", "presets"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["every-5min", "business-hours", "cert-renewal"] {
        assert!(text.contains(name), "missing preset {}", name);
    }
    assert!(text.contains("*/15 9-17 * * 1-5"));
}
