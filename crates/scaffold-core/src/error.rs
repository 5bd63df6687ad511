//! Error types for scaffolding operations

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("{tool} version {found} is older than the required {required}")]
    IncompatibleTool {
        tool: &'static str,
        found: String,
        required: String,
    },

    #[error("invalid version '{0}'")]
    InvalidVersion(String),

    #[error("unknown lifecycle event: {0}")]
    UnknownEvent(String),

    #[error("{0} not found in PATH")]
    ToolNotFound(&'static str),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Attach the failing path and action to a raw io error.
pub(crate) trait IoContext<T> {
    fn at(self, action: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, action: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        })
    }
}

impl ScaffoldError {
    /// Whether this error is the fatal version mismatch (exit status 1).
    pub fn is_incompatible_tool(&self) -> bool {
        matches!(self, ScaffoldError::IncompatibleTool { .. })
    }
}
