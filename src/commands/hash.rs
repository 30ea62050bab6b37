//! Hash, HMAC and verify command handlers

use std::process::ExitCode;

use console::style;

use crate::cli::args::{HashGenerateArgs, HashHmacArgs, HashVerifyArgs};
use crate::error::Result;
use crate::hashing::{self, HashAlgorithm};
use crate::input;
use crate::output;

pub fn run_generate(args: HashGenerateArgs) -> Result<ExitCode> {
    let payload = input::resolve(args.data.as_deref(), args.file.as_deref())?;

    if args.all {
        let source = payload.source.describe(payload.bytes.len());
        output::print_header(&format!("Digests: {}", source));
        let rows: Vec<Vec<String>> = HashAlgorithm::ALL
            .iter()
            .map(|algorithm| {
                vec![
                    algorithm.label().to_string(),
                    casefold(hashing::digest(*algorithm, &payload.bytes), args.upper),
                ]
            })
            .collect();
        output::print_table(&["Algorithm", "Digest"], &rows);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{}",
        casefold(hashing::digest(args.algorithm, &payload.bytes), args.upper)
    );
    Ok(ExitCode::SUCCESS)
}

pub fn run_hmac(args: HashHmacArgs) -> Result<ExitCode> {
    let payload = input::resolve(args.data.as_deref(), args.file.as_deref())?;
    let tag = hashing::hmac(args.algorithm, args.key.as_bytes(), &payload.bytes)?;
    println!("{}", casefold(tag, args.upper));
    Ok(ExitCode::SUCCESS)
}

fn casefold(digest: String, upper: bool) -> String {
    if upper {
        digest.to_ascii_uppercase()
    } else {
        digest
    }
}

pub fn run_verify(args: HashVerifyArgs) -> Result<ExitCode> {
    let payload = input::resolve(args.data.as_deref(), args.file.as_deref())?;
    let actual = hashing::digest(args.algorithm, &payload.bytes);

    if hashing::digests_match(&args.expected, &actual) {
        output::print_success(&format!("Hash matches ({})", args.algorithm.label()));
        Ok(ExitCode::SUCCESS)
    } else {
        output::print_error("Hash mismatch");
        eprintln!("    {}", style(format!("Expected: {}", args.expected.trim())).dim());
        eprintln!("    {}", style(format!("Actual:   {}", actual)).dim());
        Ok(ExitCode::from(1))
    }
}
