//! Network diagnostics handlers: dns, port, ping

use std::process::ExitCode;
use std::time::Duration;

use console::style;

use crate::cli::args::{NetDnsArgs, NetPingArgs, NetPortArgs};
use crate::error::{OpskitError, Result};
use crate::net::{dns, ping, port, PortState};
use crate::output;

const DNS_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn run_dns(args: NetDnsArgs) -> Result<ExitCode> {
    let spinner = output::create_spinner(&format!("Resolving {}...", args.hostname));
    let records = dns::lookup(&args.hostname, args.record_type, DNS_TIMEOUT).await;
    spinner.finish_and_clear();
    let records = records?;

    if records.is_empty() {
        output::print_warning(&format!(
            "no {} records found for {}",
            args.record_type.label(),
            args.hostname
        ));
        return Ok(ExitCode::SUCCESS);
    }

    output::print_header(&format!("DNS Lookup: {}", args.hostname));
    let rows: Vec<Vec<String>> = records
        .into_iter()
        .map(|value| vec![args.record_type.label().to_string(), value])
        .collect();
    output::print_table(&["Type", "Value"], &rows);
    Ok(ExitCode::SUCCESS)
}

pub async fn run_port(args: NetPortArgs) -> Result<ExitCode> {
    let ports = port::parse_port_spec(&args.ports)?;
    let per_port_timeout = parse_timeout_secs(args.timeout)?;

    let spinner = output::create_spinner(&format!(
        "Scanning {} port(s) on {}...",
        ports.len(),
        args.host
    ));
    let reports = port::scan(&args.host, &ports, per_port_timeout, args.parallel).await;
    spinner.finish_and_clear();
    let reports = reports?;

    let open = reports
        .iter()
        .filter(|r| r.state == PortState::Open)
        .count();

    output::print_header(&format!("Port Check: {}", args.host));
    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|report| {
            let service = match report.state {
                PortState::Open => port::service_name(report.port)
                    .unwrap_or("unknown")
                    .to_string(),
                _ => "-".to_string(),
            };
            let latency = report
                .connect_time
                .map(|t| format!("{} ms", t.as_millis()))
                .unwrap_or_else(|| "-".to_string());
            vec![
                report.port.to_string(),
                report.state.label().to_string(),
                service,
                latency,
            ]
        })
        .collect();
    output::print_table(&["Port", "Status", "Service", "Time"], &rows);
    println!(
        "    {}",
        style(format!("{} of {} port(s) open", open, reports.len())).dim()
    );
    Ok(ExitCode::SUCCESS)
}

/// Turn a user-supplied seconds value into a Duration
///
/// `Duration::from_secs_f64` panics on NaN, negative, and oversized
/// values, so the range is checked first.
fn parse_timeout_secs(seconds: f64) -> Result<Duration> {
    if !seconds.is_finite() || seconds <= 0.0 || seconds > 3600.0 {
        return Err(OpskitError::parse(format!(
            "invalid timeout '{}': expected seconds between 0 and 3600",
            seconds
        )));
    }
    Ok(Duration::from_secs_f64(seconds))
}

pub async fn run_ping(args: NetPingArgs) -> Result<ExitCode> {
    // One probe per second plus handshake slack
    let budget = Duration::from_secs(u64::from(args.count) * 5 + 10);

    let spinner = output::create_spinner(&format!("Pinging {}...", args.host));
    let report = ping::ping(&args.host, args.count, budget).await;
    spinner.finish_and_clear();
    let report = report?;

    if report.is_reachable() {
        let avg = report
            .average_ms()
            .map(|ms| format!("{:.1} ms avg, ", ms))
            .unwrap_or_default();
        output::print_success(&format!(
            "{} is reachable ({}{:.0}% loss)",
            report.host,
            avg,
            report.loss_percent()
        ));
        println!();
        println!("{}", report.output.trim_end());
        Ok(ExitCode::SUCCESS)
    } else {
        output::print_error(&format!("{} is unreachable (100% packet loss)", report.host));
        if !report.output.trim().is_empty() {
            println!();
            println!("{}", report.output.trim_end());
        }
        Ok(ExitCode::from(1))
    }
}
