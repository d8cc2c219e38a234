use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

/// Broad classes of failure reported by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Configuration,
    InvalidInput,
    Io,
}

#[derive(Debug, Error)]
pub enum SundirError {
    #[error("invalid angle {input:?}: {reason}")]
    InvalidAngle { input: String, reason: &'static str },

    #[error("angle {input:?} ({value}°) is outside ±{limit}°")]
    AngleOutOfRange {
        input: String,
        value: f64,
        limit: f64,
    },

    #[error("invalid date {input:?} (expected YYYY/MM/DD HH:MM:SS): {source}")]
    InvalidTimestamp {
        input: String,
        source: chrono::ParseError,
    },

    #[error("unknown time zone {input:?}")]
    UnknownZone { input: String },

    #[error("local time {local} cannot be mapped to UTC")]
    UnresolvableLocalTime { local: NaiveDateTime },

    #[error("repeat count must be at least 1, got {count}")]
    InvalidRepeat { count: i64 },

    #[error("cannot write to {path:?}: {reason}")]
    OutputPath { path: PathBuf, reason: &'static str },

    #[error("{name} must be finite, got {value}")]
    InvalidInput { name: &'static str, value: f64 },

    #[error("sample instant {offset_seconds}s from the start is out of range")]
    InstantOutOfRange { offset_seconds: i128 },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error on {path:?}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

impl SundirError {
    pub fn invalid_angle(input: &str, reason: &'static str) -> Self {
        Self::InvalidAngle {
            input: input.to_string(),
            reason,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAngle { .. }
            | Self::AngleOutOfRange { .. }
            | Self::InvalidTimestamp { .. }
            | Self::UnknownZone { .. }
            | Self::UnresolvableLocalTime { .. } => ErrorKind::Parse,
            Self::InvalidRepeat { .. } | Self::OutputPath { .. } => ErrorKind::Configuration,
            Self::InvalidInput { .. } | Self::InstantOutOfRange { .. } => ErrorKind::InvalidInput,
            Self::Io { .. } | Self::Csv { .. } => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, SundirError>;

pub fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SundirError {
    SundirError::Io {
        path: path.into(),
        source,
    }
}
