//! DNS record lookups

use crate::error::{OpskitError, Result};
use clap::ValueEnum;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Txt,
}

impl RecordType {
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Txt => "TXT",
        }
    }
}

/// Resolve one record type for a hostname
///
/// An empty result means the name exists but carries no records of the
/// requested type. NXDOMAIN and transport failures surface as errors.
pub async fn lookup(
    hostname: &str,
    record_type: RecordType,
    timeout: Duration,
) -> Result<Vec<String>> {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 2;

    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), opts);
    tracing::debug!(hostname, record_type = record_type.label(), "starting lookup");

    let outcome: std::result::Result<Vec<String>, ResolveError> = match record_type {
        RecordType::A => resolver
            .ipv4_lookup(hostname)
            .await
            .map(|r| r.iter().map(|ip| ip.to_string()).collect()),
        RecordType::Aaaa => resolver
            .ipv6_lookup(hostname)
            .await
            .map(|r| r.iter().map(|ip| ip.to_string()).collect()),
        RecordType::Cname => resolver
            .lookup(hostname, hickory_resolver::proto::rr::RecordType::CNAME)
            .await
            .map(|r| r.iter().map(|data| trim_dot(&data.to_string())).collect()),
        RecordType::Mx => resolver.mx_lookup(hostname).await.map(|r| {
            let mut rows: Vec<(u16, String)> = r
                .iter()
                .map(|mx| (mx.preference(), trim_dot(&mx.exchange().to_string())))
                .collect();
            rows.sort();
            rows.into_iter()
                .map(|(preference, exchange)| format!("{} {}", preference, exchange))
                .collect()
        }),
        RecordType::Ns => resolver
            .ns_lookup(hostname)
            .await
            .map(|r| r.iter().map(|ns| trim_dot(&ns.to_string())).collect()),
        RecordType::Txt => resolver.txt_lookup(hostname).await.map(|r| {
            r.iter()
                .map(|txt| {
                    txt.txt_data()
                        .iter()
                        .map(|d| String::from_utf8_lossy(d).to_string())
                        .collect::<Vec<_>>()
                        .join("")
                })
                .collect()
        }),
    };

    match outcome {
        Ok(rows) => Ok(rows),
        Err(e) => classify(hostname, e),
    }
}

fn classify(hostname: &str, error: ResolveError) -> Result<Vec<String>> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                Err(OpskitError::resolution(format!(
                    "{}: hostname not found (NXDOMAIN)",
                    hostname
                )))
            } else {
                Ok(Vec::new())
            }
        }
        _ => Err(OpskitError::resolution(format!(
            "DNS lookup for {} failed: {}",
            hostname, error
        ))),
    }
}

fn trim_dot(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}
