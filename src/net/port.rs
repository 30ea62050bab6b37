//! Concurrent TCP port scanning

use crate::error::{OpskitError, Result};
use futures::stream::{self, StreamExt};
use std::collections::BTreeSet;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tokio::net::{lookup_host, TcpStream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    Open,
    Closed,
    Filtered,
}

impl PortState {
    pub fn label(&self) -> &'static str {
        match self {
            PortState::Open => "OPEN",
            PortState::Closed => "CLOSED",
            PortState::Filtered => "FILTERED",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortReport {
    pub port: u16,
    pub state: PortState,
    pub connect_time: Option<Duration>,
}

/// Parse "80,443,8000-8010" into a sorted, deduplicated port list
pub fn parse_port_spec(spec: &str) -> Result<Vec<u16>> {
    let mut ports: BTreeSet<u16> = BTreeSet::new();

    for part in spec.split(',') {
        let part = part.trim();
        if let Some((start_text, end_text)) = part.split_once('-') {
            let start = parse_port(start_text)?;
            let end = parse_port(end_text)?;
            if start > end {
                return Err(OpskitError::parse(format!("reversed port range '{}'", part)));
            }
            ports.extend(start..=end);
        } else {
            ports.insert(parse_port(part)?);
        }
    }

    if ports.is_empty() {
        return Err(OpskitError::parse("no ports to scan"));
    }
    Ok(ports.into_iter().collect())
}

fn parse_port(text: &str) -> Result<u16> {
    let text = text.trim();
    text.parse::<u16>()
        .map_err(|_| OpskitError::parse(format!("invalid port '{}'", text)))
}

/// Probe every port and report in ascending order
///
/// Each probe carries its own timeout, and the scan as a whole runs
/// against a deadline derived from the batch count, so one stalled
/// probe cannot hold up the rest of the report.
pub async fn scan(
    host: &str,
    ports: &[u16],
    per_port_timeout: Duration,
    parallel: usize,
) -> Result<Vec<PortReport>> {
    let target = resolve_target(host).await?;

    let parallel = parallel.max(1);
    let batches = ports.len().div_ceil(parallel) as u32 + 1;
    let deadline = Instant::now() + per_port_timeout * batches;
    tracing::debug!(target = %target, ports = ports.len(), parallel, "starting scan");

    let mut reports: Vec<PortReport> = stream::iter(ports.iter().copied())
        .map(|port| {
            let addr = SocketAddr::new(target, port);
            async move { probe(addr, port, per_port_timeout, deadline).await }
        })
        .buffer_unordered(parallel)
        .collect()
        .await;

    reports.sort_by_key(|r| r.port);
    Ok(reports)
}

async fn resolve_target(host: &str) -> Result<IpAddr> {
    let mut addrs = lookup_host((host, 0u16))
        .await
        .map_err(|e| OpskitError::resolution(format!("cannot resolve host {}: {}", host, e)))?;
    addrs
        .next()
        .map(|a| a.ip())
        .ok_or_else(|| OpskitError::resolution(format!("no addresses found for {}", host)))
}

async fn probe(addr: SocketAddr, port: u16, per_port: Duration, deadline: Instant) -> PortReport {
    let remaining = deadline.saturating_duration_since(Instant::now());
    let budget = per_port.min(remaining);
    if budget.is_zero() {
        return PortReport {
            port,
            state: PortState::Filtered,
            connect_time: None,
        };
    }

    let start = Instant::now();
    match tokio::time::timeout(budget, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => PortReport {
            port,
            state: PortState::Open,
            connect_time: Some(start.elapsed()),
        },
        Ok(Err(e)) => {
            let text = e.to_string().to_lowercase();
            let state = if text.contains("refused") {
                PortState::Closed
            } else {
                PortState::Filtered
            };
            PortReport {
                port,
                state,
                connect_time: None,
            }
        }
        Err(_) => PortReport {
            port,
            state: PortState::Filtered,
            connect_time: None,
        },
    }
}

/// Best-effort service name for well-known ports
pub fn service_name(port: u16) -> Option<&'static str> {
    Some(match port {
        21 => "ftp",
        22 => "ssh",
        23 => "telnet",
        25 => "smtp",
        53 => "dns",
        80 => "http",
        110 => "pop3",
        123 => "ntp",
        143 => "imap",
        443 => "https",
        465 => "smtps",
        587 => "submission",
        993 => "imaps",
        995 => "pop3s",
        1433 => "mssql",
        3306 => "mysql",
        3389 => "rdp",
        5432 => "postgresql",
        5672 => "amqp",
        6379 => "redis",
        8080 => "http-alt",
        8443 => "https-alt",
        9092 => "kafka",
        11211 => "memcached",
        27017 => "mongodb",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_with_list_and_range() {
        let ports = parse_port_spec("443,80,8000-8003").unwrap();
        assert_eq!(ports, vec![80, 443, 8000, 8001, 8002, 8003]);
    }

    #[test]
    fn spec_deduplicates() {
        let ports = parse_port_spec("80,80,79-81").unwrap();
        assert_eq!(ports, vec![79, 80, 81]);
    }

    #[test]
    fn bad_specs_are_rejected() {
        assert!(parse_port_spec("eighty").is_err());
        assert!(parse_port_spec("100-50").is_err());
        assert!(parse_port_spec("70000").is_err());
        assert!(parse_port_spec("").is_err());
    }

    #[test]
    fn well_known_services() {
        assert_eq!(service_name(443), Some("https"));
        assert_eq!(service_name(6379), Some("redis"));
        assert_eq!(service_name(49999), None);
    }

    #[tokio::test]
    async fn open_port_is_reported_open() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let reports = scan("127.0.0.1", &[port], Duration::from_secs(2), 4)
            .await
            .unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].state, PortState::Open);
        assert!(reports[0].connect_time.is_some());
    }

    #[tokio::test]
    async fn closed_port_is_reported_closed() {
        // Bind then drop so the port is free but almost certainly closed
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let reports = scan("127.0.0.1", &[port], Duration::from_secs(2), 4)
            .await
            .unwrap();
        assert_eq!(reports[0].state, PortState::Closed);
    }

    #[tokio::test]
    async fn results_come_back_in_ascending_order() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open_port = listener.local_addr().unwrap().port();
        let mut ports = vec![open_port];
        // A couple of closed neighbours, deliberately out of order
        ports.push(open_port.wrapping_sub(1).max(1));
        ports.sort_unstable();
        ports.dedup();

        let reports = scan("127.0.0.1", &ports, Duration::from_secs(2), 8)
            .await
            .unwrap();
        let reported: Vec<u16> = reports.iter().map(|r| r.port).collect();
        let mut expected = reported.clone();
        expected.sort_unstable();
        assert_eq!(reported, expected);
    }
}
