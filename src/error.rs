use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for rps
#[derive(Debug, Error)]
pub enum RpsError {
    /// Writing output or another plain I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The process-information root could not be listed
    #[error("Cannot list process root {path}: {source}")]
    ProcRoot { path: PathBuf, source: io::Error },

    /// The status record could not be opened or read, usually because the process exited
    #[error("Process vanished: PID {pid}: {source}")]
    ProcessVanished { pid: String, source: io::Error },

    /// The status record was read but is shorter than the stat layout
    #[error("Malformed status record for PID {pid}: {found} tokens, need {expected}")]
    MalformedRecord {
        pid: String,
        found: usize,
        expected: usize,
    },

    /// Configuration parsing failed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file is invalid
    #[error("Invalid configuration file {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    /// Invalid argument provided
    #[error("Invalid argument: {argument}")]
    InvalidArgument { argument: String },
}

impl RpsError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        RpsError::Config {
            message: message.into(),
        }
    }

    /// Create a process root error
    pub fn proc_root(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RpsError::ProcRoot {
            path: path.into(),
            source,
        }
    }

    /// Create a vanished process error
    pub fn process_vanished(pid: impl Into<String>, source: io::Error) -> Self {
        RpsError::ProcessVanished {
            pid: pid.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(pid: impl Into<String>, found: usize, expected: usize) -> Self {
        RpsError::MalformedRecord {
            pid: pid.into(),
            found,
            expected,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(argument: impl Into<String>) -> Self {
        RpsError::InvalidArgument {
            argument: argument.into(),
        }
    }

    /// Create a config invalid error
    pub fn config_invalid(path: PathBuf, reason: impl Into<String>) -> Self {
        RpsError::ConfigInvalid {
            path,
            reason: reason.into(),
        }
    }

    /// Per-process failures that a scan skips instead of aborting on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RpsError::ProcessVanished { .. } | RpsError::MalformedRecord { .. }
        )
    }
}

/// Result type alias for rps operations
pub type Result<T> = std::result::Result<T, RpsError>;
