//! Dependency manifest parsing
//!
//! A project declares what it needs at runtime in `jarfetch.toml`:
//!
//! ```toml
//! # Optional; applies to entries without their own repository
//! repository = "https://repo.example.com/releases"
//!
//! # Built-in catalog entries
//! known = ["guava", "jedis"]
//!
//! [[dependency]]
//! group = "org.mariadb.jdbc"
//! artifact = "mariadb-java-client"
//! version = "2.4.3"
//!
//! [[dependency]]
//! group = "com.github.Trigary"
//! artifact = "AdvancementCreator"
//! version = "v2.0"
//! repository = "https://jitpack.io"
//! ```

use crate::catalog::KnownDependency;
use crate::coordinate::Coordinate;
use crate::error::{FetchError, FetchResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Manifest file name looked up in the working directory
pub const MANIFEST_FILE_NAME: &str = "jarfetch.toml";

/// Parsed `jarfetch.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyManifest {
    /// Manifest-wide default repository
    #[serde(default)]
    pub repository: Option<String>,

    /// Catalog entries by name
    #[serde(default)]
    pub known: Vec<String>,

    /// Explicit dependencies
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<ManifestEntry>,
}

/// One `[[dependency]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    pub group: String,
    pub artifact: String,
    pub version: String,
    #[serde(default)]
    pub repository: Option<String>,
}

impl DependencyManifest {
    /// Parse a manifest from a TOML file on disk
    pub fn from_file(path: &Path) -> FetchResult<Self> {
        if !path.exists() {
            return Err(FetchError::ManifestNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| FetchError::io(format!("reading manifest {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| FetchError::ManifestInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse a manifest from a TOML string
    pub fn parse(content: &str) -> FetchResult<Self> {
        toml::from_str(content).map_err(|e| FetchError::ManifestInvalid {
            path: MANIFEST_FILE_NAME.into(),
            reason: e.to_string(),
        })
    }

    /// Coordinates in declaration order: explicit dependencies first, then
    /// catalog entries.
    ///
    /// Entries without a repository use the manifest's `repository`, or
    /// `default_repository` if the manifest has none.
    pub fn coordinates(&self, default_repository: &str) -> FetchResult<Vec<Coordinate>> {
        let fallback = self.repository.as_deref().unwrap_or(default_repository);

        let mut coordinates = Vec::with_capacity(self.dependencies.len() + self.known.len());
        for entry in &self.dependencies {
            let repository = entry.repository.as_deref().unwrap_or(fallback);
            coordinates.push(Coordinate::new(
                &entry.group,
                &entry.artifact,
                &entry.version,
                repository,
            )?);
        }
        for name in &self.known {
            let known: KnownDependency = name.parse()?;
            coordinates.push(known.coordinate());
        }

        debug!("Manifest declares {} dependencies", coordinates.len());
        Ok(coordinates)
    }
}

/// Find `jarfetch.toml` in `dir`
pub fn find_manifest(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(MANIFEST_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::DEFAULT_REPOSITORY;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
known = ["jedis"]

[[dependency]]
group = "org.mariadb.jdbc"
artifact = "mariadb-java-client"
version = "2.4.3"

[[dependency]]
group = "com.github.Trigary"
artifact = "AdvancementCreator"
version = "v2.0"
repository = "https://jitpack.io"
"#;

    #[test]
    fn parses_entries_in_order() {
        let manifest = DependencyManifest::parse(MANIFEST).unwrap();
        let coordinates = manifest.coordinates(DEFAULT_REPOSITORY).unwrap();

        let notations: Vec<_> = coordinates.iter().map(|c| c.notation()).collect();
        assert_eq!(
            notations,
            vec![
                "org.mariadb.jdbc:mariadb-java-client:2.4.3",
                "com.github.Trigary:AdvancementCreator:v2.0",
                "redis.clients:jedis:3.1.0",
            ]
        );
        assert_eq!(coordinates[0].repository(), DEFAULT_REPOSITORY);
        assert_eq!(coordinates[1].repository(), "https://jitpack.io");
    }

    #[test]
    fn manifest_repository_overrides_default() {
        let manifest = DependencyManifest::parse(
            r#"
repository = "https://mirror.example.com/m2"

[[dependency]]
group = "a.b"
artifact = "c"
version = "1"
"#,
        )
        .unwrap();

        let coordinates = manifest.coordinates(DEFAULT_REPOSITORY).unwrap();
        assert_eq!(coordinates[0].repository(), "https://mirror.example.com/m2");
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest = DependencyManifest::parse("").unwrap();
        assert!(manifest.coordinates(DEFAULT_REPOSITORY).unwrap().is_empty());
    }

    #[test]
    fn unknown_catalog_name_fails() {
        let manifest = DependencyManifest::parse(r#"known = ["left-pad"]"#).unwrap();
        let err = manifest.coordinates(DEFAULT_REPOSITORY).unwrap_err();
        assert!(matches!(err, FetchError::UnknownCatalogEntry(_)));
    }

    #[test]
    fn empty_field_fails() {
        let manifest = DependencyManifest::parse(
            r#"
[[dependency]]
group = ""
artifact = "c"
version = "1"
"#,
        )
        .unwrap();
        assert!(matches!(
            manifest.coordinates(DEFAULT_REPOSITORY).unwrap_err(),
            FetchError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = DependencyManifest::parse(
            r#"
[[dependency]]
group = "a"
artifact = "b"
version = "1"
scope = "test"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, FetchError::ManifestInvalid { .. }));
    }

    #[test]
    fn from_file_and_find() {
        let dir = TempDir::new().unwrap();
        assert!(find_manifest(dir.path()).is_none());

        let path = dir.path().join(MANIFEST_FILE_NAME);
        fs::write(&path, MANIFEST).unwrap();

        assert_eq!(find_manifest(dir.path()), Some(path.clone()));
        let manifest = DependencyManifest::from_file(&path).unwrap();
        assert_eq!(manifest.dependencies.len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = DependencyManifest::from_file(&dir.path().join("jarfetch.toml")).unwrap_err();
        assert!(matches!(err, FetchError::ManifestNotFound(_)));
    }
}
