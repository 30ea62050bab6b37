//! Secure password and passphrase generation
//!
//! All randomness comes from the operating system CSPRNG.

pub mod wordlist;

use crate::error::{OpskitError, Result};
use rand::rngs::OsRng;
use rand::Rng;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude: Option<String>,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        PasswordOptions {
            length: 24,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PassphraseOptions {
    pub words: usize,
    pub separator: String,
    pub capitalize: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        PassphraseOptions {
            words: 6,
            separator: "-".to_string(),
            capitalize: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Excellent,
    Good,
    Fair,
    Weak,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        if bits >= 128.0 {
            Strength::Excellent
        } else if bits >= 80.0 {
            Strength::Good
        } else if bits >= 60.0 {
            Strength::Fair
        } else {
            Strength::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Excellent => "Excellent",
            Strength::Good => "Good",
            Strength::Fair => "Fair",
            Strength::Weak => "Weak",
        }
    }
}

/// Build the character pool implied by the options
pub fn charset(options: &PasswordOptions) -> Result<Vec<char>> {
    let mut pool = String::new();
    if options.uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.digits {
        pool.push_str(DIGITS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }

    let pool: Vec<char> = match &options.exclude {
        Some(exclude) => pool.chars().filter(|c| !exclude.contains(*c)).collect(),
        None => pool.chars().collect(),
    };

    if pool.is_empty() {
        return Err(OpskitError::input(
            "no characters available with current settings",
        ));
    }
    Ok(pool)
}

pub fn generate(options: &PasswordOptions) -> Result<String> {
    let pool = charset(options)?;
    let mut rng = OsRng;
    Ok((0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

pub fn passphrase(options: &PassphraseOptions) -> String {
    let mut rng = OsRng;
    let chosen: Vec<String> = (0..options.words)
        .map(|_| {
            let word = wordlist::WORDS[rng.gen_range(0..wordlist::WORDS.len())];
            if options.capitalize {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect();
    chosen.join(&options.separator)
}

/// Shannon entropy of a uniform draw: length * log2(pool size)
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size < 2 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn passphrase_entropy_bits(words: usize) -> f64 {
    entropy_bits(words, wordlist::WORDS.len())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
