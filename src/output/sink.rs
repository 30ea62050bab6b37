//! Result delivery: terminal or `--output` file
//!
//! Binary results never hit the terminal raw; without `--output` they
//! collapse to a byte-count notice so a decrypted tarball cannot wreck
//! the user's session.

use crate::error::Result;
use crate::output::terminal::{print_info, print_success};
use std::path::Path;

/// Write a text result to a file, or print it plainly for piping
pub fn emit_text(output: Option<&Path>, text: &str, label: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            print_success(&format!("{} written to {}", label, path.display()));
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Write a byte result to a file, or print it if it is valid UTF-8
pub fn emit_bytes(output: Option<&Path>, data: &[u8], label: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, data)?;
            print_success(&format!("{} written to {}", label, path.display()));
        }
        None => match std::str::from_utf8(data) {
            Ok(text) => println!("{}", text),
            Err(_) => print_info(&format!(
                "{}: {} bytes (binary data, use --output to save)",
                label,
                data.len()
            )),
        },
    }
    Ok(())
}
