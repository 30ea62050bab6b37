//! CLI argument definitions using clap

use crate::crypto::CipherAlgorithm;
use crate::hashing::HashAlgorithm;
use crate::net::RecordType;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "opskit")]
#[command(author = "Russ McKendrick")]
#[command(version)]
#[command(about = "A Swiss Army knife CLI for DevOps engineers", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt and decrypt data
    #[command(subcommand)]
    Encrypt(EncryptCommands),

    /// JSON beautify, minify, validate and query
    #[command(subcommand)]
    Json(JsonCommands),

    /// YAML lint, validate and convert
    #[command(subcommand)]
    Yaml(YamlCommands),

    /// Generate secure passwords and passphrases
    #[command(subcommand)]
    Password(PasswordCommands),

    /// Generate and explain cron expressions
    #[command(subcommand)]
    Cron(CronCommands),

    /// Generate hashes and HMACs
    #[command(subcommand)]
    Hash(HashCommands),

    /// Base64 encode and decode
    #[command(subcommand)]
    Base64(Base64Commands),

    /// Decode and inspect JWT tokens
    #[command(subcommand)]
    Jwt(JwtCommands),

    /// Generate UUIDs
    #[command(subcommand)]
    Uuid(UuidCommands),

    /// Inspect TLS certificates
    #[command(subcommand)]
    Cert(CertCommands),

    /// Network utilities
    #[command(subcommand)]
    Net(NetCommands),

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum EncryptCommands {
    /// Encrypt data or a file
    Enc(EncryptArgs),

    /// Decrypt data or a file
    Dec(DecryptArgs),

    /// List supported encryption algorithms
    Algorithms,
}

#[derive(Args)]
pub struct EncryptArgs {
    /// Data to encrypt (or pipe via stdin)
    pub data: Option<String>,

    /// Encryption password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Encryption algorithm
    #[arg(short, long, value_enum, default_value = "aes-256-gcm")]
    pub algorithm: CipherAlgorithm,

    /// Encrypt a file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write result to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct DecryptArgs {
    /// Encrypted data (or pipe via stdin)
    pub data: Option<String>,

    /// Decryption password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Decrypt from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write result to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum JsonCommands {
    /// Pretty-print JSON
    Beautify(JsonBeautifyArgs),

    /// Strip whitespace from JSON
    Minify(JsonMinifyArgs),

    /// Validate JSON syntax
    Validate(JsonValidateArgs),

    /// Query JSON with a JMESPath expression
    Query(JsonQueryArgs),
}

#[derive(Args)]
pub struct JsonBeautifyArgs {
    /// JSON string (or pipe via stdin)
    pub data: Option<String>,

    /// Read from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write result to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Indentation spaces
    #[arg(short, long, default_value = "2")]
    pub indent: usize,

    /// Sort object keys
    #[arg(short, long)]
    pub sort_keys: bool,
}

#[derive(Args)]
pub struct JsonMinifyArgs {
    /// JSON string (or pipe via stdin)
    pub data: Option<String>,

    /// Read from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write result to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct JsonValidateArgs {
    /// JSON string (or pipe via stdin)
    pub data: Option<String>,

    /// Read from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct JsonQueryArgs {
    /// JMESPath query expression
    #[arg(required = true)]
    pub expression: String,

    /// JSON string
    #[arg(short, long)]
    pub data: Option<String>,

    /// Read from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum YamlCommands {
    /// Lint a YAML file
    Lint(YamlLintArgs),

    /// Validate YAML syntax
    Validate(YamlValidateArgs),

    /// Convert YAML to JSON
    ToJson(YamlToJsonArgs),

    /// Convert JSON to YAML
    ToYaml(YamlToYamlArgs),
}

#[derive(Args)]
pub struct YamlLintArgs {
    /// YAML file to lint
    #[arg(required = true)]
    pub file: PathBuf,

    /// Fail on style warnings too
    #[arg(short, long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct YamlValidateArgs {
    /// YAML string (or pipe via stdin)
    pub data: Option<String>,

    /// Read from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct YamlToJsonArgs {
    /// YAML string (or pipe via stdin)
    pub data: Option<String>,

    /// Read from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write result to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// JSON indentation
    #[arg(short, long, default_value = "2")]
    pub indent: usize,
}

#[derive(Args)]
pub struct YamlToYamlArgs {
    /// JSON string (or pipe via stdin)
    pub data: Option<String>,

    /// Read JSON from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write result to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum PasswordCommands {
    /// Generate random passwords
    Generate(PasswordGenerateArgs),

    /// Generate memorable passphrases
    Passphrase(PassphraseArgs),
}

#[derive(Args)]
pub struct PasswordGenerateArgs {
    /// Password length
    #[arg(short, long, default_value = "24")]
    pub length: usize,

    /// Number of passwords to generate
    #[arg(short, long, default_value = "1")]
    pub count: usize,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Characters to exclude
    #[arg(short, long, value_name = "CHARS")]
    pub exclude: Option<String>,
}

#[derive(Args)]
pub struct PassphraseArgs {
    /// Number of words
    #[arg(short, long, default_value = "6")]
    pub words: usize,

    /// Word separator
    #[arg(short, long, default_value = "-")]
    pub separator: String,

    /// Capitalize the first letter of each word
    #[arg(short, long)]
    pub capitalize: bool,

    /// Number of passphrases
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
}

#[derive(Subcommand)]
pub enum CronCommands {
    /// Explain a cron expression
    Explain(CronExplainArgs),

    /// Generate a cron expression from a preset or custom fields
    Generate(CronGenerateArgs),

    /// Show common cron presets
    Presets,
}

#[derive(Args)]
pub struct CronExplainArgs {
    /// Cron expression to explain (quote it)
    #[arg(required = true)]
    pub expression: String,

    /// Also list the next N fire times
    #[arg(long, value_name = "N")]
    pub next: Option<usize>,
}

#[derive(Args)]
pub struct CronGenerateArgs {
    /// Preset name (see 'cron presets')
    pub preset: Option<String>,

    /// Minute field
    #[arg(short, long)]
    pub minute: Option<String>,

    /// Hour field
    #[arg(short = 'H', long)]
    pub hour: Option<String>,

    /// Day-of-month field
    #[arg(short, long)]
    pub day: Option<String>,

    /// Month field
    #[arg(short = 'M', long)]
    pub month: Option<String>,

    /// Day-of-week field
    #[arg(short, long)]
    pub weekday: Option<String>,
}

#[derive(Subcommand)]
pub enum HashCommands {
    /// Generate a hash digest
    Generate(HashGenerateArgs),

    /// Generate an HMAC digest
    Hmac(HashHmacArgs),

    /// Verify data against a known hash
    Verify(HashVerifyArgs),
}

#[derive(Args)]
pub struct HashGenerateArgs {
    /// Data to hash (or pipe via stdin)
    pub data: Option<String>,

    /// Hash algorithm
    #[arg(short, long = "algo", value_enum, default_value = "sha256")]
    pub algorithm: HashAlgorithm,

    /// Hash a file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Show digests for all algorithms
    #[arg(long)]
    pub all: bool,

    /// Uppercase hex output
    #[arg(short, long)]
    pub upper: bool,
}

#[derive(Args)]
pub struct HashHmacArgs {
    /// Data to hash (or pipe via stdin)
    pub data: Option<String>,

    /// HMAC secret key
    #[arg(short, long, required = true)]
    pub key: String,

    /// Hash algorithm
    #[arg(short, long = "algo", value_enum, default_value = "sha256")]
    pub algorithm: HashAlgorithm,

    /// Hash a file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Uppercase hex output
    #[arg(short, long)]
    pub upper: bool,
}

#[derive(Args)]
pub struct HashVerifyArgs {
    /// Data to verify (or pipe via stdin)
    pub data: Option<String>,

    /// Expected hex digest
    #[arg(short, long, required = true)]
    pub expected: String,

    /// Hash algorithm
    #[arg(short, long = "algo", value_enum, default_value = "sha256")]
    pub algorithm: HashAlgorithm,

    /// Verify a file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Base64Commands {
    /// Encode data to Base64
    Encode(Base64EncodeArgs),

    /// Decode Base64 data
    Decode(Base64DecodeArgs),
}

#[derive(Args)]
pub struct Base64EncodeArgs {
    /// Data to encode (or pipe via stdin)
    pub data: Option<String>,

    /// Encode a file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write result to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use the URL-safe alphabet
    #[arg(short, long)]
    pub url_safe: bool,
}

#[derive(Args)]
pub struct Base64DecodeArgs {
    /// Base64 string to decode (or pipe via stdin)
    pub data: Option<String>,

    /// Read from file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write result to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use the URL-safe alphabet
    #[arg(short, long)]
    pub url_safe: bool,
}

#[derive(Subcommand)]
pub enum JwtCommands {
    /// Decode a JWT without verifying it
    Decode(JwtDecodeArgs),
}

#[derive(Args)]
pub struct JwtDecodeArgs {
    /// JWT token (or pipe via stdin)
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum UuidCommands {
    /// Generate UUIDs
    Generate(UuidGenerateArgs),
}

#[derive(Args)]
pub struct UuidGenerateArgs {
    /// UUID version (1, 4, or 5)
    #[arg(short = 'v', long = "version", default_value = "4")]
    pub version: u8,

    /// Number of UUIDs
    #[arg(short, long, default_value = "1")]
    pub count: usize,

    /// Uppercase output
    #[arg(short, long)]
    pub upper: bool,

    /// Name for v5 UUIDs
    #[arg(short, long)]
    pub name: Option<String>,

    /// Namespace for v5 UUIDs: dns, url, oid, x500, or a literal UUID
    #[arg(long, default_value = "dns", value_name = "NS")]
    pub namespace: UuidNamespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidNamespace {
    Dns,
    Url,
    Oid,
    X500,
    Custom(uuid::Uuid),
}

impl std::str::FromStr for UuidNamespace {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dns" => Ok(UuidNamespace::Dns),
            "url" => Ok(UuidNamespace::Url),
            "oid" => Ok(UuidNamespace::Oid),
            "x500" => Ok(UuidNamespace::X500),
            other => uuid::Uuid::parse_str(other)
                .map(UuidNamespace::Custom)
                .map_err(|_| format!("expected dns, url, oid, x500, or a UUID, got '{}'", s)),
        }
    }
}

#[derive(Subcommand)]
pub enum CertCommands {
    /// Inspect the certificate of a remote host
    Inspect(CertInspectArgs),

    /// Check certificate expiry (monitoring-friendly exit codes)
    Expiry(CertExpiryArgs),
}

#[derive(Args)]
pub struct CertInspectArgs {
    /// Hostname to check
    #[arg(required = true)]
    pub host: String,

    /// Port number
    #[arg(short, long, default_value = "443")]
    pub port: u16,

    /// Connection timeout in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,
}

#[derive(Args)]
pub struct CertExpiryArgs {
    /// Hostname to check
    #[arg(required = true)]
    pub host: String,

    /// Port number
    #[arg(short, long, default_value = "443")]
    pub port: u16,

    /// Warning threshold in days
    #[arg(short, long, default_value = "30")]
    pub warn: i64,
}

#[derive(Subcommand)]
pub enum NetCommands {
    /// DNS lookup for a hostname
    Dns(NetDnsArgs),

    /// Check whether ports are open on a host
    Port(NetPortArgs),

    /// Ping a host
    Ping(NetPingArgs),
}

#[derive(Args)]
pub struct NetDnsArgs {
    /// Hostname to resolve
    #[arg(required = true)]
    pub hostname: String,

    /// Record type
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        ignore_case = true,
        default_value = "a"
    )]
    pub record_type: RecordType,
}

#[derive(Args)]
pub struct NetPortArgs {
    /// Host to check
    #[arg(required = true)]
    pub host: String,

    /// Ports to check (comma-separated or ranges: 80,443 or 8000-8010)
    #[arg(required = true)]
    pub ports: String,

    /// Per-port timeout in seconds
    #[arg(short, long, default_value = "2.0")]
    pub timeout: f64,

    /// Number of concurrent probes
    #[arg(long, default_value = "32")]
    pub parallel: usize,
}

#[derive(Args)]
pub struct NetPingArgs {
    /// Host to ping
    #[arg(required = true)]
    pub host: String,

    /// Number of pings
    #[arg(short, long, default_value = "4")]
    pub count: u32,
}
