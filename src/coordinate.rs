//! Artifact coordinates
//!
//! A coordinate names one downloadable artifact: its Maven group, artifact id,
//! version and the repository it is served from. Coordinates are written on
//! the command line as `group:artifact:version[@repository]`.

use crate::error::{FetchError, FetchResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Base URL used when a coordinate names no repository
pub const DEFAULT_REPOSITORY: &str = "http://repo1.maven.org/maven2";

/// Immutable artifact coordinate, compared by all four fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: String,
    repository: String,
}

impl Coordinate {
    /// Create a coordinate, rejecting empty fields
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        repository: impl Into<String>,
    ) -> FetchResult<Self> {
        let coordinate = Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            repository: repository.into(),
        };

        let fields = [
            ("group id", &coordinate.group_id),
            ("artifact id", &coordinate.artifact_id),
            ("version", &coordinate.version),
            ("repository", &coordinate.repository),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(FetchError::invalid_url(
                    coordinate.notation(),
                    format!("{} is empty", name),
                ));
            }
        }

        if coordinate.group_id.contains(['/', '\\']) {
            return Err(FetchError::invalid_url(
                coordinate.notation(),
                "group id must not contain path separators",
            ));
        }
        // Artifact and version name the cache file, so they must stay a
        // single segment inside the cache directory
        for (name, value) in [
            ("artifact id", &coordinate.artifact_id),
            ("version", &coordinate.version),
        ] {
            check_segment(name, value)
                .map_err(|reason| FetchError::invalid_url(coordinate.notation(), reason))?;
        }

        Ok(coordinate)
    }

    /// Coordinate in the default central repository
    pub fn central(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> FetchResult<Self> {
        Self::new(group_id, artifact_id, version, DEFAULT_REPOSITORY)
    }

    /// Built-in coordinates from static tables
    pub(crate) fn from_static(
        group_id: &'static str,
        artifact_id: &'static str,
        version: &'static str,
        repository: &'static str,
    ) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            repository: repository.to_string(),
        }
    }

    /// Parse `group:artifact:version[@repository]`, falling back to
    /// `default_repository` when no repository is given
    pub fn parse(notation: &str, default_repository: &str) -> FetchResult<Self> {
        let notation = notation.trim();
        let (gav, repository) = match notation.split_once('@') {
            Some((gav, repo)) => (gav, repo.trim()),
            None => (notation, default_repository),
        };

        let parts: Vec<&str> = gav.split(':').collect();
        match parts.as_slice() {
            [group, artifact, version] => Self::new(*group, *artifact, *version, repository),
            _ => Err(FetchError::invalid_url(
                notation,
                "expected group:artifact:version[@repository]",
            )),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Repository base URL, as given
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// `group:artifact:version` without the repository
    pub fn notation(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// File name of the artifact in the flat cache directory
    pub fn file_name(&self) -> String {
        format!("{}-{}.jar", self.artifact_id, self.version)
    }
}

/// Check that `value` is usable as exactly one path segment
pub(crate) fn check_segment(name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is empty", name));
    }
    if value.contains(['/', '\\']) {
        return Err(format!("{} must not contain path separators", name));
    }
    if value == "." || value == ".." {
        return Err(format!("{} must not be '{}'", name, value));
    }
    Ok(())
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.notation(), self.repository)
    }
}

impl FromStr for Coordinate {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_REPOSITORY)
    }
}
