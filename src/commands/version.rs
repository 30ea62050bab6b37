//! Version information

use std::process::ExitCode;

use crate::error::Result;
use crate::output;

pub fn run_version() -> Result<ExitCode> {
    output::print_panel(
        &format!("opskit v{}", env!("CARGO_PKG_VERSION")),
        "A Swiss Army knife CLI for DevOps engineers",
    );
    Ok(ExitCode::SUCCESS)
}
