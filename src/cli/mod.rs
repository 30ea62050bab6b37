//! Command-line interface module
//!
//! Argument parsing with clap; one Args struct per subcommand.

pub mod args;

pub use args::{Cli, Commands};
