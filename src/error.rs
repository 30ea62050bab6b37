//! Error types for opskit
//!
//! One enum covers every failure mode across the subcommands, with an
//! exit-code mapping so monitoring scripts can distinguish soft failures
//! (bad input, failed validation) from hard network failures.

use thiserror::Error;

/// Top-level error type for the opskit application
#[derive(Error, Debug)]
pub enum OpskitError {
    #[error("No input provided. Pass data as an argument, --file, or pipe via stdin")]
    NoInput,

    #[error("Input error: {message}")]
    Input { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Decryption failed. Wrong password or corrupted data")]
    Authentication,

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("TLS error: {message}")]
    Tls { message: String },

    #[error("DNS resolution failed: {message}")]
    Resolution { message: String },

    #[error("Unknown preset: {name}. Run 'opskit cron presets' for available presets")]
    UnknownPreset { name: String },

    #[error("Missing argument: {message}")]
    MissingArgument { message: String },

    #[error("Crypto error: {message}")]
    Crypto { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OpskitError {
    /// Process exit code for this error
    ///
    /// Network-layer failures exit 2 so monitoring scripts can tell an
    /// unreachable host apart from bad input; everything else exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            OpskitError::Connection { .. }
            | OpskitError::Tls { .. }
            | OpskitError::Resolution { .. } => 2,
            _ => 1,
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        OpskitError::Input {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        OpskitError::Parse {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        OpskitError::Decode {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        OpskitError::Connection {
            message: message.into(),
        }
    }

    pub fn tls(message: impl Into<String>) -> Self {
        OpskitError::Tls {
            message: message.into(),
        }
    }

    pub fn resolution(message: impl Into<String>) -> Self {
        OpskitError::Resolution {
            message: message.into(),
        }
    }

    pub fn missing_argument(message: impl Into<String>) -> Self {
        OpskitError::MissingArgument {
            message: message.into(),
        }
    }

    pub fn crypto(message: impl Into<String>) -> Self {
        OpskitError::Crypto {
            message: message.into(),
        }
    }
}

/// Result type alias using OpskitError
pub type Result<T> = std::result::Result<T, OpskitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_exit_two() {
        assert_eq!(OpskitError::connection("refused").exit_code(), 2);
        assert_eq!(OpskitError::tls("handshake").exit_code(), 2);
        assert_eq!(OpskitError::resolution("nxdomain").exit_code(), 2);
    }

    #[test]
    fn soft_errors_exit_one() {
        assert_eq!(OpskitError::NoInput.exit_code(), 1);
        assert_eq!(OpskitError::parse("bad field").exit_code(), 1);
        assert_eq!(OpskitError::Authentication.exit_code(), 1);
        assert_eq!(
            OpskitError::UnknownPreset {
                name: "nope".to_string()
            }
            .exit_code(),
            1
        );
    }
}
