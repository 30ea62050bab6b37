//! Network probes: DNS lookups, port scanning, echo

pub mod dns;
pub mod ping;
pub mod port;

pub use dns::RecordType;
pub use ping::PingReport;
pub use port::{PortReport, PortState};
