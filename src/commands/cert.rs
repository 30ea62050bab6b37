//! Certificate inspect and expiry handlers
//!
//! `expiry` follows the Nagios plugin convention: exit 0 when the
//! certificate is comfortably valid, 1 inside the warning window, 2
//! when expired or unreachable, with a single parseable status line.

use std::process::ExitCode;
use std::time::Duration;

use console::style;

use crate::certificate::{fetch_certificate, ExpiryStatus};
use crate::cli::args::{CertExpiryArgs, CertInspectArgs};
use crate::error::Result;
use crate::output;

const EXPIRY_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub fn run_inspect(args: CertInspectArgs) -> Result<ExitCode> {
    let spinner =
        output::create_spinner(&format!("Connecting to {}:{}...", args.host, args.port));
    let handshake = fetch_certificate(&args.host, args.port, Duration::from_secs(args.timeout));
    spinner.finish_and_clear();
    let handshake = handshake?;

    let cert = &handshake.certificate;
    output::print_header(&format!("Certificate: {}:{}", args.host, args.port));

    let mut rows: Vec<(&str, String)> = vec![
        ("Common Name", display(&cert.subject.common_name)),
        ("Organization", display(&cert.subject.organization)),
        ("Issuer", display(&cert.issuer.organization)),
        ("Issuer CN", display(&cert.issuer.common_name)),
        ("Serial Number", cert.serial_number.clone()),
        (
            "Valid From",
            crate::certificate::format_validity(&cert.not_before),
        ),
        (
            "Valid Until",
            crate::certificate::format_validity(&cert.not_after),
        ),
        ("Status", status_text(&cert.expiry_status(30))),
        ("Signature", cert.signature_algorithm.clone()),
        ("SHA-256", cert.fingerprint_sha256.clone()),
        ("Protocol", handshake.protocol.clone()),
    ];
    if let Some(cipher) = &handshake.cipher {
        rows.push(("Cipher", cipher.clone()));
    }
    if cert.is_ca {
        rows.push(("CA", "yes".to_string()));
    }
    if !cert.subject_alt_names.is_empty() {
        rows.push(("SANs", san_summary(&cert.subject_alt_names)));
    }
    output::print_kv_table(&rows);
    println!(
        "    {}",
        style(format!("Handshake took {} ms", handshake.response_time_ms)).dim()
    );
    Ok(ExitCode::SUCCESS)
}

pub fn run_expiry(args: CertExpiryArgs) -> Result<ExitCode> {
    let handshake = match fetch_certificate(&args.host, args.port, EXPIRY_FETCH_TIMEOUT) {
        Ok(handshake) => handshake,
        Err(e) => {
            println!(
                "{}",
                style(format!("CRITICAL - {}: {}", args.host, e)).red()
            );
            return Ok(ExitCode::from(2));
        }
    };

    match handshake.certificate.expiry_status(args.warn) {
        ExpiryStatus::Expired { days_ago } => {
            println!(
                "{}",
                style(format!(
                    "CRITICAL - {}: certificate expired {} days ago",
                    args.host, days_ago
                ))
                .red()
            );
            Ok(ExitCode::from(2))
        }
        ExpiryStatus::ExpiringSoon { days_left } => {
            println!(
                "{}",
                style(format!(
                    "WARNING - {}: certificate expires in {} days",
                    args.host, days_left
                ))
                .yellow()
            );
            Ok(ExitCode::from(1))
        }
        ExpiryStatus::Valid { days_left } => {
            println!(
                "{}",
                style(format!(
                    "OK - {}: certificate valid for {} days",
                    args.host, days_left
                ))
                .green()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn display(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| "N/A".to_string())
}

fn status_text(status: &ExpiryStatus) -> String {
    match status {
        ExpiryStatus::Expired { days_ago } => format!("EXPIRED ({} days ago)", days_ago),
        ExpiryStatus::ExpiringSoon { days_left } => {
            format!("EXPIRING SOON ({} days left)", days_left)
        }
        ExpiryStatus::Valid { days_left } => format!("Valid ({} days remaining)", days_left),
    }
}

/// First five names, then a count of the rest
fn san_summary(names: &[String]) -> String {
    let shown: Vec<&str> = names.iter().take(5).map(String::as_str).collect();
    let mut summary = shown.join(", ");
    if names.len() > 5 {
        summary.push_str(&format!(" ... and {} more", names.len() - 5));
    }
    summary
}
