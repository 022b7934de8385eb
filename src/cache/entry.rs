//! Cached artifact metadata for listings

use crate::error::{FetchError, FetchResult};
use chrono::{DateTime, Local};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A complete artifact found in the cache directory
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Full path to the artifact
    pub path: PathBuf,
    /// `<artifact>-<version>.jar`
    pub file_name: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification time, if the platform reports one
    pub modified: Option<DateTime<Local>>,
}

impl CacheEntry {
    /// Read metadata for the artifact at `path`
    pub fn from_path(path: PathBuf) -> FetchResult<Self> {
        let metadata = fs::metadata(&path)
            .map_err(|e| FetchError::io(format!("reading metadata of {}", path.display()), e))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
            path,
        })
    }

    /// SHA-256 of the artifact contents
    pub fn digest(&self) -> FetchResult<String> {
        sha256_hex(&self.path)
    }
}

/// Hash a file's contents with SHA-256, hex encoded
pub fn sha256_hex(path: &Path) -> FetchResult<String> {
    let mut file = fs::File::open(path)
        .map_err(|e| FetchError::io(format!("opening {}", path.display()), e))?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .map_err(|e| FetchError::io(format!("hashing {}", path.display()), e))?;

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_size_and_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("asm-7.0.jar");
        fs::write(&path, b"12345").unwrap();

        let entry = CacheEntry::from_path(path).unwrap();
        assert_eq!(entry.file_name, "asm-7.0.jar");
        assert_eq!(entry.size, 5);
        assert!(entry.modified.is_some());
    }

    #[test]
    fn digest_matches_known_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.jar");
        fs::write(&path, b"").unwrap();

        assert_eq!(
            sha256_hex(&path).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_differs_by_content() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.jar");
        let b = dir.path().join("b.jar");
        fs::write(&a, b"content 1").unwrap();
        fs::write(&b, b"content 2").unwrap();

        assert_ne!(sha256_hex(&a).unwrap(), sha256_hex(&b).unwrap());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = sha256_hex(&dir.path().join("nope.jar")).unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
