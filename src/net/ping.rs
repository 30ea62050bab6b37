//! Echo probes via the system ping binary

use crate::error::{OpskitError, Result};
use std::time::Duration;
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct PingReport {
    pub host: String,
    pub transmitted: u32,
    pub received: u32,
    pub times_ms: Vec<f64>,
    pub output: String,
}

impl PingReport {
    pub fn loss_percent(&self) -> f64 {
        if self.transmitted == 0 {
            return 100.0;
        }
        // Duplicate replies can push received past transmitted
        let lost = self.transmitted.saturating_sub(self.received);
        f64::from(lost) * 100.0 / f64::from(self.transmitted)
    }

    pub fn is_reachable(&self) -> bool {
        self.received > 0
    }

    pub fn average_ms(&self) -> Option<f64> {
        if self.times_ms.is_empty() {
            return None;
        }
        Some(self.times_ms.iter().sum::<f64>() / self.times_ms.len() as f64)
    }
}

/// Send `count` echo probes using the system ping binary
///
/// An unreachable target is not an error: the report comes back with
/// zero replies and the caller decides how to surface that.
pub async fn ping(host: &str, count: u32, timeout: Duration) -> Result<PingReport> {
    let count_flag = if cfg!(windows) { "-n" } else { "-c" };

    let run = Command::new("ping")
        .arg(count_flag)
        .arg(count.to_string())
        .arg(host)
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(timeout, run)
        .await
        .map_err(|_| OpskitError::connection(format!("ping to {} timed out", host)))?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OpskitError::connection("ping binary not found on this system")
            } else {
                OpskitError::connection(format!("failed to run ping: {}", e))
            }
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let text = if stdout.trim().is_empty() { stderr } else { stdout };

    Ok(parse_ping_output(host, count, &text))
}

fn parse_ping_output(host: &str, requested: u32, text: &str) -> PingReport {
    let mut times_ms = Vec::new();
    let mut transmitted = requested;
    let mut received: Option<u32> = None;

    for line in text.lines() {
        if let Some(time) = extract_time_ms(line) {
            times_ms.push(time);
        }
        if line.contains("packets transmitted") {
            let numbers: Vec<u32> = line
                .split(|c: char| !c.is_ascii_digit())
                .filter(|s| !s.is_empty())
                .filter_map(|s| s.parse().ok())
                .collect();
            if numbers.len() >= 2 {
                transmitted = numbers[0];
                received = Some(numbers[1]);
            }
        }
    }

    // Some ping flavours word the summary differently; fall back to
    // counting the reply lines we saw
    let received = received.unwrap_or(times_ms.len() as u32);

    PingReport {
        host: host.to_string(),
        transmitted,
        received,
        times_ms,
        output: text.to_string(),
    }
}

fn extract_time_ms(line: &str) -> Option<f64> {
    let index = line.find("time=")?;
    let rest = &line[index + 5..];
    let value: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    value.parse().ok()
}
