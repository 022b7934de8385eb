//! Error types for jarfetch
//!
//! All modules use `FetchResult<T>` as their return type.

use crate::coordinate::Coordinate;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jarfetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// All errors that can occur in jarfetch
#[derive(Error, Debug)]
pub enum FetchError {
    // Resolution errors
    #[error("Invalid artifact URL from '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("Unknown catalog entry: {0}")]
    UnknownCatalogEntry(String),

    // Transfer errors
    #[error("Transfer from {url} failed: {reason}")]
    Transfer { url: String, reason: String },

    #[error("Unable to download dependency {coordinate}: {reason}")]
    DependencyUnavailable {
        coordinate: Coordinate,
        reason: String,
    },

    #[error("{failed} of {total} dependencies could not be installed")]
    PartialInstall { failed: usize, total: usize },

    // Install errors
    #[error("Unable to install dependency {path}: {source}")]
    Install {
        path: PathBuf,
        #[source]
        source: InstallError,
    },

    // Manifest errors
    #[error("Invalid dependency manifest at {path}: {reason}")]
    ManifestInvalid { path: PathBuf, reason: String },

    #[error("Dependency manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Cache errors
    #[error("Failed to create cache directory {path}: {source}")]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl FetchError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a transfer error
    pub fn transfer(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transfer {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidUrl { .. } => {
                Some("Coordinates use group:artifact:version[@repository] with an http(s) repository")
            }
            Self::UnknownCatalogEntry(_) => Some("Run: jarfetch catalog"),
            Self::DependencyUnavailable { .. } | Self::PartialInstall { .. } => {
                Some("Check the repository URL and your network connection")
            }
            Self::ManifestNotFound(_) => Some("Create jarfetch.toml or pass --manifest <path>"),
            _ => None,
        }
    }
}

/// Failure reported by an [`Installer`](crate::install::Installer)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InstallError(String);

impl InstallError {
    /// Create an install error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::invalid_url(":guava:1.0", "group id is empty");
        assert!(err.to_string().contains("Invalid artifact URL"));
        assert!(err.to_string().contains("group id is empty"));
    }

    #[test]
    fn unavailable_names_coordinate() {
        let coordinate: Coordinate = "com.google.guava:guava:28.1-jre".parse().unwrap();
        let err = FetchError::DependencyUnavailable {
            coordinate,
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("com.google.guava:guava:28.1-jre"));
    }

    #[test]
    fn error_hint() {
        let err = FetchError::UnknownCatalogEntry("nope".to_string());
        assert_eq!(err.hint(), Some("Run: jarfetch catalog"));
    }
}
