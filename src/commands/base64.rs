//! Base64 encode and decode handlers

use std::process::ExitCode;

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;

use crate::cli::args::{Base64DecodeArgs, Base64EncodeArgs};
use crate::error::{OpskitError, Result};
use crate::input;
use crate::output;

pub fn run_encode(args: Base64EncodeArgs) -> Result<ExitCode> {
    let payload = input::resolve(args.data.as_deref(), args.file.as_deref())?;
    let encoded = if args.url_safe {
        URL_SAFE.encode(&payload.bytes)
    } else {
        STANDARD.encode(&payload.bytes)
    };
    output::emit_text(args.output.as_deref(), &encoded, "Encoded data")?;
    Ok(ExitCode::SUCCESS)
}

pub fn run_decode(args: Base64DecodeArgs) -> Result<ExitCode> {
    let payload = input::resolve(args.data.as_deref(), args.file.as_deref())?;
    let text = payload.into_trimmed_text()?;
    let engine = if args.url_safe { &URL_SAFE } else { &STANDARD };
    let decoded = engine
        .decode(&text)
        .map_err(|e| OpskitError::decode(format!("invalid base64: {}", e)))?;
    output::emit_bytes(args.output.as_deref(), &decoded, "Decoded data")?;
    Ok(ExitCode::SUCCESS)
}
