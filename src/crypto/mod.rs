//! Password-based authenticated encryption

pub mod cipher;
pub mod envelope;
pub mod kdf;

pub use cipher::CipherAlgorithm;
pub use envelope::{open, seal};
