//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for gitship operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShipError {
    /// Prerequisite Error - a required host tool or capability is missing
    #[error("Prerequisite error: {message}")]
    Prerequisite { message: String },

    /// Target Error - the target directory is not a usable repository
    #[error("Target error: {message}")]
    Target { message: String },

    /// Network Error - the remote file source is unreachable
    #[error("Network error: {message}")]
    Network { message: String },

    /// Source Error - file acquisition failed or the local source is incomplete
    #[error("Source error: {message}")]
    Source { message: String },

    /// Filesystem Error - file or directory operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl ShipError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Prerequisite { .. } => 1,
            Self::Target { .. } => 2,
            Self::Network { .. } => 3,
            Self::Source { .. } => 4,
            Self::Filesystem { .. } => 5,
        }
    }

    /// Create a prerequisite error
    #[inline]
    pub fn prerequisite<S: Into<String>>(message: S) -> Self {
        Self::Prerequisite {
            message: message.into(),
        }
    }

    /// Create a target error
    #[inline]
    pub fn target<S: Into<String>>(message: S) -> Self {
        Self::Target {
            message: message.into(),
        }
    }

    /// Create a network error
    #[inline]
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a source error
    #[inline]
    pub fn source<S: Into<String>>(message: S) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}
