//! Input resolution for subcommands
//!
//! Every data-taking subcommand accepts its payload from one of three
//! sources, in precedence order: positional argument, `--file`, piped
//! stdin. When more than one source is supplied the highest-precedence
//! one wins and the others are ignored with a warning on stderr, so
//! shell pipelines that also pass an argument keep working.

use crate::error::{OpskitError, Result};
use console::style;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where a payload came from, for display purposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Argument,
    File(PathBuf),
    Stdin,
}

impl Source {
    /// Short label used in panel titles, e.g. "string (5 chars)" or a path
    pub fn describe(&self, len: usize) -> String {
        match self {
            Source::Argument => format!("string ({} chars)", len),
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "stdin".to_string(),
        }
    }
}

/// A fully-read input payload and its origin
#[derive(Debug)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub source: Source,
}

impl Payload {
    /// Interpret the payload as UTF-8 text
    pub fn into_text(self) -> Result<String> {
        String::from_utf8(self.bytes)
            .map_err(|_| OpskitError::input("input is not valid UTF-8 text"))
    }

    /// Interpret as UTF-8 text with surrounding whitespace trimmed
    ///
    /// Used for token-like inputs (base64 payloads, JWTs, cron
    /// expressions) where a trailing newline from `echo` is noise.
    pub fn into_trimmed_text(self) -> Result<String> {
        Ok(self.into_text()?.trim().to_string())
    }
}

/// Resolve an input payload from argument, file, or piped stdin
pub fn resolve(argument: Option<&str>, file: Option<&Path>) -> Result<Payload> {
    if let Some(text) = argument {
        if let Some(path) = file {
            warn_ignored(&format!("--file {}", path.display()), "argument");
        }
        if stdin_is_piped() {
            warn_ignored("piped stdin", "argument");
        }
        return Ok(Payload {
            bytes: text.as_bytes().to_vec(),
            source: Source::Argument,
        });
    }

    if let Some(path) = file {
        if stdin_is_piped() {
            warn_ignored("piped stdin", "--file");
        }
        return read_file(path);
    }

    if stdin_is_piped() {
        return read_stdin();
    }

    Err(OpskitError::NoInput)
}

/// Read a payload from a file path
pub fn read_file(path: &Path) -> Result<Payload> {
    let bytes = std::fs::read(path).map_err(|e| {
        OpskitError::input(format!("cannot read {}: {}", path.display(), e))
    })?;
    Ok(Payload {
        bytes,
        source: Source::File(path.to_path_buf()),
    })
}

fn read_stdin() -> Result<Payload> {
    let mut bytes = Vec::new();
    std::io::stdin().lock().read_to_end(&mut bytes)?;
    tracing::debug!(bytes = bytes.len(), "read payload from stdin");
    Ok(Payload {
        bytes,
        source: Source::Stdin,
    })
}

fn stdin_is_piped() -> bool {
    !std::io::stdin().is_terminal()
}

fn warn_ignored(ignored: &str, used: &str) {
    eprintln!(
        "{} ignoring {} ({} takes precedence)",
        style("!").yellow().bold(),
        ignored,
        used
    );
}
