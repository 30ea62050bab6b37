//! opskit - a Swiss Army knife CLI for DevOps engineers
//!
//! Subcommands cover the small jobs that otherwise need a pile of
//! one-off scripts: encrypting secrets, reformatting JSON and YAML,
//! generating passwords and UUIDs, explaining cron expressions,
//! hashing, certificate checks and quick network diagnostics.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use opskit::cli::args::{
    Base64Commands, CertCommands, CronCommands, EncryptCommands, HashCommands, JsonCommands,
    JwtCommands, NetCommands, PasswordCommands, UuidCommands, YamlCommands,
};
use opskit::cli::{Cli, Commands};
use opskit::commands;
use opskit::error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
        std::env::set_var("NO_COLOR", "1");
    }

    match cli.command {
        Commands::Encrypt(command) => match command {
            EncryptCommands::Enc(args) => commands::encrypt::run_enc(args),
            EncryptCommands::Dec(args) => commands::encrypt::run_dec(args),
            EncryptCommands::Algorithms => commands::encrypt::run_algorithms(),
        },
        Commands::Json(command) => match command {
            JsonCommands::Beautify(args) => commands::json::run_beautify(args),
            JsonCommands::Minify(args) => commands::json::run_minify(args),
            JsonCommands::Validate(args) => commands::json::run_validate(args),
            JsonCommands::Query(args) => commands::json::run_query(args),
        },
        Commands::Yaml(command) => match command {
            YamlCommands::Lint(args) => commands::yaml::run_lint(args),
            YamlCommands::Validate(args) => commands::yaml::run_validate(args),
            YamlCommands::ToJson(args) => commands::yaml::run_to_json(args),
            YamlCommands::ToYaml(args) => commands::yaml::run_to_yaml(args),
        },
        Commands::Password(command) => match command {
            PasswordCommands::Generate(args) => commands::password::run_generate(args),
            PasswordCommands::Passphrase(args) => commands::password::run_passphrase(args),
        },
        Commands::Cron(command) => match command {
            CronCommands::Explain(args) => commands::cron::run_explain(args),
            CronCommands::Generate(args) => commands::cron::run_generate(args),
            CronCommands::Presets => commands::cron::run_presets(),
        },
        Commands::Hash(command) => match command {
            HashCommands::Generate(args) => commands::hash::run_generate(args),
            HashCommands::Hmac(args) => commands::hash::run_hmac(args),
            HashCommands::Verify(args) => commands::hash::run_verify(args),
        },
        Commands::Base64(command) => match command {
            Base64Commands::Encode(args) => commands::base64::run_encode(args),
            Base64Commands::Decode(args) => commands::base64::run_decode(args),
        },
        Commands::Jwt(command) => match command {
            JwtCommands::Decode(args) => commands::jwt::run_decode(args),
        },
        Commands::Uuid(command) => match command {
            UuidCommands::Generate(args) => commands::uuid::run_generate(args),
        },
        Commands::Cert(command) => match command {
            CertCommands::Inspect(args) => commands::cert::run_inspect(args),
            CertCommands::Expiry(args) => commands::cert::run_expiry(args),
        },
        Commands::Net(command) => match command {
            NetCommands::Dns(args) => commands::net::run_dns(args).await,
            NetCommands::Port(args) => commands::net::run_port(args).await,
            NetCommands::Ping(args) => commands::net::run_ping(args).await,
        },
        Commands::Version => commands::version::run_version(),
    }
}
