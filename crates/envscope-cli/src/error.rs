//! CLI-specific error types and mappings.
//!
//! Maps adapter errors to exit codes and user-facing messages.

use envscope_ipinfo::IpInfoError;
use envscope_runtime::SnapshotError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Snapshot file exists but is not a valid capture.
    #[error("Invalid snapshot: {0}")]
    Snapshot(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Snapshot(_) => 65, // EX_DATAERR
            Self::Output(_) => 70,   // EX_SOFTWARE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<SnapshotError> for CliError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Io { .. } => Self::Io(err.to_string()),
            SnapshotError::Parse(_) => Self::Snapshot(err.to_string()),
        }
    }
}

impl From<IpInfoError> for CliError {
    fn from(err: IpInfoError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
