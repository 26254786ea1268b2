//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown station, malformed network files, etc.)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown station, malformed network files (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown metric: {0} (expected: connections, minutes, or price)")]
    UnknownMetric(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("station not found: {name}")]
    StationNotFound { name: String },

    #[error("unknown transport mode: {value} (expected: train, bus, or plane)")]
    UnknownMode { value: String },

    #[error("invalid record in {path:?} (line {line}): {reason}")]
    InvalidRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("missing column {column:?} in {path:?}")]
    MissingColumn { path: PathBuf, column: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            WaypathError::UnknownFormat(_)
            | WaypathError::UnknownMetric(_)
            | WaypathError::UsageError(_) => ExitCode::Usage,

            // Data errors
            WaypathError::StationNotFound { .. }
            | WaypathError::UnknownMode { .. }
            | WaypathError::InvalidRecord { .. }
            | WaypathError::MissingColumn { .. } => ExitCode::Data,

            // Generic failures
            WaypathError::Io(_)
            | WaypathError::Csv(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UnknownMetric(_) => "unknown_metric",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::StationNotFound { .. } => "station_not_found",
            WaypathError::UnknownMode { .. } => "unknown_mode",
            WaypathError::InvalidRecord { .. } => "invalid_record",
            WaypathError::MissingColumn { .. } => "missing_column",
            WaypathError::Io(_) => "io_error",
            WaypathError::Csv(_) => "csv_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
