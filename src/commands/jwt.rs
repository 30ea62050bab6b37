//! JWT decoding without signature verification
//!
//! Decoding is for inspection only. The signature is never checked, and
//! every panel says so.

use std::process::ExitCode;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::cli::args::JwtDecodeArgs;
use crate::error::{OpskitError, Result};
use crate::input;
use crate::output;

pub fn run_decode(args: JwtDecodeArgs) -> Result<ExitCode> {
    let token = match args.token {
        Some(token) => token.trim().to_string(),
        None => input::resolve(None, None)?.into_trimmed_text()?,
    };

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() < 2 || segments.len() > 3 {
        return Err(OpskitError::decode(format!(
            "invalid JWT: expected 2 or 3 segments, found {}",
            segments.len()
        )));
    }

    let header = decode_segment(segments[0], "header")?;
    let claims = decode_segment(segments[1], "payload")?;

    output::print_panel("Header (unverified)", &pretty(&header)?);
    output::print_panel("Payload (unverified)", &pretty(&claims)?);
    print_details(&header, &claims, &segments);
    Ok(ExitCode::SUCCESS)
}

/// Base64url-decode one JWT segment into JSON
///
/// Tokens in the wild carry segments both with and without padding, so
/// padding is stripped before decoding with the no-pad alphabet.
fn decode_segment(segment: &str, which: &str) -> Result<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| OpskitError::decode(format!("cannot decode JWT {}: {}", which, e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| OpskitError::decode(format!("JWT {} is not valid JSON: {}", which, e)))
}

fn pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| OpskitError::decode(format!("could not render JSON: {}", e)))
}

fn print_details(header: &Value, claims: &Value, segments: &[&str]) {
    let mut rows: Vec<(&str, String)> = vec![
        ("Algorithm", claim_text(header, "alg").unwrap_or_else(|| "N/A".to_string())),
        ("Type", claim_text(header, "typ").unwrap_or_else(|| "N/A".to_string())),
    ];

    if let Some(issuer) = claim_text(claims, "iss") {
        rows.push(("Issuer", issuer));
    }
    if let Some(subject) = claim_text(claims, "sub") {
        rows.push(("Subject", subject));
    }
    if let Some(audience) = claim_text(claims, "aud") {
        rows.push(("Audience", audience));
    }
    if let Some(issued) = claim_timestamp(claims, "iat") {
        rows.push(("Issued At", issued));
    }
    if let Some(expiry) = claims.get("exp").and_then(Value::as_i64) {
        let status = if Utc::now().timestamp() > expiry {
            "EXPIRED"
        } else {
            "VALID"
        };
        rows.push(("Expires", format!("{} ({})", format_timestamp(expiry), status)));
    }
    if let Some(not_before) = claim_timestamp(claims, "nbf") {
        rows.push(("Not Before", not_before));
    }

    let signature = if segments.len() == 3 { segments[2] } else { "" };
    let presence = if signature.is_empty() { "None" } else { "Present" };
    rows.push((
        "Signature",
        format!("{} ({} chars, not verified)", presence, signature.len()),
    ));

    output::print_header("Token Details");
    output::print_kv_table(&rows);
}

/// A claim as display text; non-string claims (e.g. an `aud` array)
/// render as compact JSON
fn claim_text(value: &Value, key: &str) -> Option<String> {
    value.get(key).map(|claim| match claim {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

fn claim_timestamp(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_i64).map(format_timestamp)
}

fn format_timestamp(seconds: i64) -> String {
    match Utc.timestamp_opt(seconds, 0).single() {
        Some(when) => when.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("invalid timestamp ({})", seconds),
    }
}
