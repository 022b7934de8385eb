//! Flat artifact cache
//!
//! Artifacts live in a single directory as `<artifact>-<version>.jar`.
//! The existence of that file is the only cache-hit signal: there is no
//! metadata, checksum or expiry.
//!
//! # Entry States
//!
//! | State | On disk | Description |
//! |-------|---------|-------------|
//! | Miss | nothing | Not fetched yet |
//! | Partial | `<name>.jar.part` | Transfer in progress or interrupted, ignored |
//! | Hit | `<name>.jar` | Complete, reused as-is |

pub mod entry;

pub use entry::{sha256_hex, CacheEntry};

use crate::coordinate::Coordinate;
use crate::error::{FetchError, FetchResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix of in-flight downloads
pub const PARTIAL_SUFFIX: &str = "part";

/// Handle on a cache directory
#[derive(Debug, Clone)]
pub struct CacheDir {
    root: PathBuf,
}

impl CacheDir {
    /// Open a cache directory, creating it recursively if absent
    pub fn open(root: impl Into<PathBuf>) -> FetchResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            fs::create_dir_all(&root).map_err(|e| FetchError::CacheDirCreate {
                path: root.clone(),
                source: e,
            })?;
            debug!("Created cache directory {}", root.display());
        }
        Ok(Self { root })
    }

    /// Refer to a cache directory without touching the filesystem
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Location of a coordinate's artifact
    pub fn entry_path(&self, coordinate: &Coordinate) -> PathBuf {
        self.root.join(coordinate.file_name())
    }

    /// Location a coordinate is downloaded to before it is complete
    pub fn partial_path(&self, coordinate: &Coordinate) -> PathBuf {
        self.root
            .join(format!("{}.{}", coordinate.file_name(), PARTIAL_SUFFIX))
    }

    /// Whether the coordinate's artifact is present
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.entry_path(coordinate).is_file()
    }

    /// Complete artifacts in the cache, sorted by file name
    pub fn entries(&self) -> FetchResult<Vec<CacheEntry>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let read_dir = fs::read_dir(&self.root).map_err(|e| {
            FetchError::io(format!("reading cache directory {}", self.root.display()), e)
        })?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| FetchError::io("reading cache entry", e))?;
            let path = item.path();
            if path.extension().and_then(|e| e.to_str()) != Some("jar") || !path.is_file() {
                continue;
            }
            entries.push(CacheEntry::from_path(path)?);
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }

    /// Remove all artifacts and partial downloads, returning how many files
    /// were deleted. Unrelated files are left alone.
    pub fn clear(&self) -> FetchResult<usize> {
        if !self.root.is_dir() {
            return Ok(0);
        }

        let read_dir = fs::read_dir(&self.root).map_err(|e| {
            FetchError::io(format!("reading cache directory {}", self.root.display()), e)
        })?;

        let mut removed = 0;
        for item in read_dir {
            let item = item.map_err(|e| FetchError::io("reading cache entry", e))?;
            let path = item.path();
            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("jar") | Some(PARTIAL_SUFFIX)) || !path.is_file() {
                continue;
            }
            fs::remove_file(&path)
                .map_err(|e| FetchError::io(format!("removing {}", path.display()), e))?;
            debug!("Removed {}", path.display());
            removed += 1;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn guava() -> Coordinate {
        Coordinate::central("com.google.guava", "guava", "28.1-jre").unwrap()
    }

    #[test]
    fn open_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("plugin").join("dependencies");

        let cache = CacheDir::open(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(cache.path(), root);
    }

    #[test]
    fn entry_path_is_flat() {
        let cache = CacheDir::at("/var/cache/jarfetch");
        assert_eq!(
            cache.entry_path(&guava()),
            PathBuf::from("/var/cache/jarfetch/guava-28.1-jre.jar")
        );
        assert_eq!(
            cache.partial_path(&guava()),
            PathBuf::from("/var/cache/jarfetch/guava-28.1-jre.jar.part")
        );
    }

    #[test]
    fn contains_checks_existence_only() {
        let temp = TempDir::new().unwrap();
        let cache = CacheDir::open(temp.path()).unwrap();
        assert!(!cache.contains(&guava()));

        fs::write(cache.entry_path(&guava()), b"").unwrap();
        assert!(cache.contains(&guava()));
    }

    #[test]
    fn partial_download_is_not_a_hit() {
        let temp = TempDir::new().unwrap();
        let cache = CacheDir::open(temp.path()).unwrap();
        fs::write(cache.partial_path(&guava()), b"half").unwrap();

        assert!(!cache.contains(&guava()));
        assert!(cache.entries().unwrap().is_empty());
    }

    #[test]
    fn entries_lists_jars_sorted() {
        let temp = TempDir::new().unwrap();
        let cache = CacheDir::open(temp.path()).unwrap();
        fs::write(temp.path().join("jedis-3.1.0.jar"), b"j").unwrap();
        fs::write(temp.path().join("asm-7.0.jar"), b"asm").unwrap();
        fs::write(temp.path().join("notes.txt"), b"ignored").unwrap();

        let names: Vec<_> = cache
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.file_name)
            .collect();
        assert_eq!(names, vec!["asm-7.0.jar", "jedis-3.1.0.jar"]);
    }

    #[test]
    fn entries_of_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let cache = CacheDir::at(temp.path().join("nope"));
        assert!(cache.entries().unwrap().is_empty());
    }

    #[test]
    fn clear_removes_artifacts_only() {
        let temp = TempDir::new().unwrap();
        let cache = CacheDir::open(temp.path()).unwrap();
        fs::write(temp.path().join("jedis-3.1.0.jar"), b"j").unwrap();
        fs::write(temp.path().join("asm-7.0.jar.part"), b"a").unwrap();
        fs::write(temp.path().join("README"), b"keep").unwrap();

        assert_eq!(cache.clear().unwrap(), 2);
        assert!(temp.path().join("README").exists());
        assert!(cache.entries().unwrap().is_empty());
    }
}
