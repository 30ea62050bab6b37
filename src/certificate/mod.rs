//! TLS certificate retrieval and inspection

pub mod chain;
pub mod info;

pub use chain::{fetch_certificate, TlsHandshake};
pub use info::{format_validity, CertificateInfo, DistinguishedName, ExpiryStatus};
