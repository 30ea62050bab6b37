//! X.509 leaf certificate parsing

use crate::error::{OpskitError, Result};
use chrono::{DateTime, TimeZone, Utc};
use sha2::{Digest, Sha256};
use std::net::{Ipv4Addr, Ipv6Addr};
use x509_parser::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct DistinguishedName {
    pub common_name: Option<String>,
    pub organization: Option<String>,
    pub organizational_unit: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub locality: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CertificateInfo {
    pub subject: DistinguishedName,
    pub issuer: DistinguishedName,
    pub serial_number: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub days_until_expiry: i64,
    pub signature_algorithm: String,
    pub subject_alt_names: Vec<String>,
    pub is_ca: bool,
    pub fingerprint_sha256: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired { days_ago: i64 },
    ExpiringSoon { days_left: i64 },
    Valid { days_left: i64 },
}

impl CertificateInfo {
    pub fn expiry_status(&self, warn_days: i64) -> ExpiryStatus {
        if self.days_until_expiry < 0 {
            ExpiryStatus::Expired {
                days_ago: -self.days_until_expiry,
            }
        } else if self.days_until_expiry <= warn_days {
            ExpiryStatus::ExpiringSoon {
                days_left: self.days_until_expiry,
            }
        } else {
            ExpiryStatus::Valid {
                days_left: self.days_until_expiry,
            }
        }
    }
}

/// Format a validity timestamp the way monitoring tooling expects it
pub fn format_validity(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Parse a DER-encoded certificate into the fields we report on
pub fn parse_certificate(der: &[u8]) -> Result<CertificateInfo> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| OpskitError::parse(format!("failed to parse certificate: {:?}", e)))?;

    let subject = extract_name(cert.subject());
    let issuer = extract_name(cert.issuer());

    let not_before = asn1_time(cert.validity().not_before)?;
    let not_after = asn1_time(cert.validity().not_after)?;
    let days_until_expiry = (not_after - Utc::now()).num_days();

    Ok(CertificateInfo {
        subject,
        issuer,
        serial_number: cert.raw_serial_as_string(),
        not_before,
        not_after,
        days_until_expiry,
        signature_algorithm: signature_name(&cert.signature_algorithm.algorithm.to_string()),
        subject_alt_names: extract_san(&cert),
        is_ca: cert.is_ca(),
        fingerprint_sha256: hex::encode(Sha256::digest(der)),
    })
}

fn extract_name(name: &X509Name) -> DistinguishedName {
    DistinguishedName {
        common_name: first_value(name.iter_common_name()),
        organization: first_value(name.iter_organization()),
        organizational_unit: first_value(name.iter_organizational_unit()),
        country: first_value(name.iter_country()),
        state: first_value(name.iter_state_or_province()),
        locality: first_value(name.iter_locality()),
    }
}

fn first_value<'a>(
    mut iter: impl Iterator<Item = &'a AttributeTypeAndValue<'a>>,
) -> Option<String> {
    iter.next()
        .and_then(|attr| attr.as_str().ok())
        .map(|s| s.to_string())
}

fn extract_san(cert: &X509Certificate) -> Vec<String> {
    let mut sans = Vec::new();

    if let Ok(Some(extension)) = cert.subject_alternative_name() {
        for name in &extension.value.general_names {
            match name {
                GeneralName::DNSName(dns) => sans.push(dns.to_string()),
                GeneralName::IPAddress(ip) => match ip.len() {
                    4 => sans.push(Ipv4Addr::new(ip[0], ip[1], ip[2], ip[3]).to_string()),
                    16 => {
                        let mut octets = [0u8; 16];
                        octets.copy_from_slice(ip);
                        sans.push(Ipv6Addr::from(octets).to_string());
                    }
                    _ => {}
                },
                GeneralName::RFC822Name(email) => sans.push(email.to_string()),
                GeneralName::URI(uri) => sans.push(uri.to_string()),
                _ => {}
            }
        }
    }

    sans
}

/// Map a signature algorithm OID to a readable name
fn signature_name(oid: &str) -> String {
    match oid {
        "1.2.840.113549.1.1.5" => "SHA1withRSA".to_string(),
        "1.2.840.113549.1.1.11" => "SHA256withRSA".to_string(),
        "1.2.840.113549.1.1.12" => "SHA384withRSA".to_string(),
        "1.2.840.113549.1.1.13" => "SHA512withRSA".to_string(),
        "1.2.840.113549.1.1.10" => "RSA-PSS".to_string(),
        "1.2.840.10045.4.3.2" => "ECDSA-SHA256".to_string(),
        "1.2.840.10045.4.3.3" => "ECDSA-SHA384".to_string(),
        "1.2.840.10045.4.3.4" => "ECDSA-SHA512".to_string(),
        "1.3.101.112" => "Ed25519".to_string(),
        "1.3.101.113" => "Ed448".to_string(),
        other => other.to_string(),
    }
}

fn asn1_time(time: ASN1Time) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| OpskitError::parse("certificate has an invalid timestamp"))
}
