//! Subcommand handlers
//!
//! Each handler consumes its parsed arguments and returns the process
//! exit code. Hard failures propagate as errors and are mapped to exit
//! codes in main; soft failures (a failed validation, a hash mismatch)
//! print their own verdict and return the code directly.

pub mod base64;
pub mod cert;
pub mod cron;
pub mod encrypt;
pub mod hash;
pub mod json;
pub mod jwt;
pub mod net;
pub mod password;
pub mod uuid;
pub mod version;
pub mod yaml;
