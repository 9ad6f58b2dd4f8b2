use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed check declaration on line {line}: {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("No baseline files found: {0}")]
    NoBaselines(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CheckError {
    /// Short, stable name of the error kind, used in machine-readable output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Read(_) => "Read",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::Parse { .. } => "Parse",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::NoBaselines(_) => "NoBaselines",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
