//! opskit Library
//!
//! A Swiss Army knife CLI for DevOps engineers, providing:
//! - Authenticated encryption with password-derived keys
//! - JSON and YAML formatting, validation and conversion
//! - Password, passphrase and UUID generation
//! - Cron expression parsing, explanation and presets
//! - Hashing, HMAC and digest verification
//! - TLS certificate inspection and expiry monitoring
//! - DNS, port and ping diagnostics
//!
//! # Usage
//!
//! ```rust,ignore
//! use opskit::crypto::{self, CipherAlgorithm};
//!
//! let token = crypto::seal(b"secret", "password", CipherAlgorithm::Aes256Gcm)?;
//! let plaintext = crypto::open(&token, "password")?;
//! ```

pub mod certificate;
pub mod cli;
pub mod commands;
pub mod cron;
pub mod crypto;
pub mod error;
pub mod hashing;
pub mod input;
pub mod net;
pub mod output;
pub mod password;

// Re-export commonly used types
pub use cli::Cli;
pub use error::{OpskitError, Result};
