//! Encrypt and decrypt command handlers

use std::process::ExitCode;

use dialoguer::Password;

use crate::cli::args::{DecryptArgs, EncryptArgs};
use crate::crypto::{self, CipherAlgorithm};
use crate::error::{OpskitError, Result};
use crate::input;
use crate::output;

pub fn run_enc(args: EncryptArgs) -> Result<ExitCode> {
    let payload = input::resolve(args.data.as_deref(), args.file.as_deref())?;
    let password = resolve_password(args.password, "Encryption password", true)?;

    let token = crypto::seal(&payload.bytes, &password, args.algorithm)?;
    output::emit_text(args.output.as_deref(), &token, "Encrypted data")?;
    Ok(ExitCode::SUCCESS)
}

pub fn run_dec(args: DecryptArgs) -> Result<ExitCode> {
    let payload = input::resolve(args.data.as_deref(), args.file.as_deref())?;
    let password = resolve_password(args.password, "Decryption password", false)?;

    let token = payload.into_trimmed_text()?;
    let plaintext = crypto::open(&token, &password)?;
    output::emit_bytes(args.output.as_deref(), &plaintext, "Decrypted data")?;
    Ok(ExitCode::SUCCESS)
}

pub fn run_algorithms() -> Result<ExitCode> {
    output::print_header("Supported Algorithms");
    let rows: Vec<Vec<String>> = CipherAlgorithm::catalogue()
        .iter()
        .map(|(name, kdf, notes)| vec![name.to_string(), kdf.to_string(), notes.to_string()])
        .collect();
    output::print_table(&["Algorithm", "Key Derivation", "Notes"], &rows);
    Ok(ExitCode::SUCCESS)
}

/// Use the password flag when given, otherwise prompt on the TTY
fn resolve_password(provided: Option<String>, prompt: &str, confirm: bool) -> Result<String> {
    if let Some(password) = provided {
        return Ok(password);
    }
    let mut dialog = Password::new().with_prompt(prompt);
    if confirm {
        dialog = dialog.with_confirmation("Confirm password", "Passwords do not match");
    }
    dialog
        .interact()
        .map_err(|e| OpskitError::input(format!("could not read password: {}", e)))
}
