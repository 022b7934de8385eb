//! Fetch-and-install manager
//!
//! Owns the ordered, deduplicated set of requested coordinates and turns it
//! into installed artifacts. Each coordinate goes through:
//!
//! ```text
//! Registered -> CacheHit ------------------> Installed
//!            \-> Downloading -> Downloaded -> Installed
//!                           \-> Failed
//! ```
//!
//! A transfer failure is not fatal where it happens. The manager only checks
//! afterwards whether the artifact exists; a missing artifact at that point is
//! `DependencyUnavailable`, which by default aborts the whole pass.

use crate::cache::CacheDir;
use crate::coordinate::{Coordinate, DEFAULT_REPOSITORY};
use crate::error::{FetchError, FetchResult};
use crate::install::Installer;
use crate::resolver::resolve_url;
use crate::transport::{HttpTransport, Transport};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

/// What to do when a dependency cannot be made available
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the pass at the first unavailable dependency
    #[default]
    Stop,
    /// Attempt every dependency and report the unavailable ones
    Continue,
}

/// How an installed artifact got into the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactSource {
    /// Already present, no network access
    Cached,
    /// Fetched during this pass
    Downloaded,
}

/// An artifact handed to the installer
#[derive(Debug, Clone, Serialize)]
pub struct InstalledArtifact {
    pub coordinate: Coordinate,
    pub path: PathBuf,
    pub source: ArtifactSource,
}

/// A dependency that could not be made available
#[derive(Debug, Clone, Serialize)]
pub struct FailedArtifact {
    pub coordinate: Coordinate,
    pub reason: String,
}

/// Outcome of a fetch-and-install pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    pub installed: Vec<InstalledArtifact>,
    /// Only populated under [`FailurePolicy::Continue`]
    pub failed: Vec<FailedArtifact>,
}

impl InstallReport {
    /// Whether every requested dependency was installed
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of artifacts fetched over the network
    pub fn downloaded(&self) -> usize {
        self.installed
            .iter()
            .filter(|a| a.source == ArtifactSource::Downloaded)
            .count()
    }
}

/// Append `coordinate` unless an equal one is already present
fn push_unique(pending: &mut Vec<Coordinate>, coordinate: Coordinate) {
    if pending.contains(&coordinate) {
        debug!("Already registered: {}", coordinate);
        return;
    }
    pending.push(coordinate);
}

/// Deduplicate coordinates the way registration does: first occurrence
/// wins, order is kept
pub fn unique_coordinates(coordinates: impl IntoIterator<Item = Coordinate>) -> Vec<Coordinate> {
    let mut unique = Vec::new();
    for coordinate in coordinates {
        push_unique(&mut unique, coordinate);
    }
    unique
}

/// Downloads missing artifacts into a cache directory and installs them
pub struct FetchManager {
    pending: Vec<Coordinate>,
    cache: CacheDir,
    verbose: bool,
    transport: Box<dyn Transport>,
    policy: FailurePolicy,
    default_repository: String,
}

impl FetchManager {
    /// Create a manager over `cache_dir`, creating the directory if needed.
    ///
    /// `verbose` promotes progress lines from debug to info and transfer
    /// failures from debug to warn.
    pub fn new(cache_dir: impl Into<PathBuf>, verbose: bool) -> FetchResult<Self> {
        Ok(Self {
            pending: Vec::new(),
            cache: CacheDir::open(cache_dir)?,
            verbose,
            transport: Box::new(HttpTransport::default()),
            policy: FailurePolicy::default(),
            default_repository: DEFAULT_REPOSITORY.to_string(),
        })
    }

    /// Replace the transport used for downloads
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Repository used by [`register_parts`](Self::register_parts) when none is given
    pub fn with_default_repository(mut self, repository: impl Into<String>) -> Self {
        self.default_repository = repository.into();
        self
    }

    pub fn cache(&self) -> &CacheDir {
        &self.cache
    }

    /// Queue a coordinate unless an equal one is already queued
    pub fn register(&mut self, coordinate: Coordinate) {
        push_unique(&mut self.pending, coordinate);
    }

    /// Build a coordinate from its parts and queue it
    pub fn register_parts(
        &mut self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        repository: Option<&str>,
    ) -> FetchResult<()> {
        let repository = repository.unwrap_or(&self.default_repository);
        let coordinate = Coordinate::new(group_id, artifact_id, version, repository)?;
        self.register(coordinate);
        Ok(())
    }

    /// Queue several coordinates in order
    pub fn register_all(&mut self, coordinates: impl IntoIterator<Item = Coordinate>) {
        for coordinate in coordinates {
            self.register(coordinate);
        }
    }

    /// Snapshot of the queued coordinates in registration order
    pub fn pending(&self) -> Vec<Coordinate> {
        self.pending.clone()
    }

    /// Make every queued artifact available locally and install it.
    ///
    /// Coordinates are processed strictly in registration order. Under
    /// [`FailurePolicy::Stop`] the first unavailable dependency is returned as
    /// `DependencyUnavailable` and nothing after it is attempted. An installer
    /// error is always fatal.
    pub fn fetch_and_install(&self, installer: &mut dyn Installer) -> FetchResult<InstallReport> {
        let mut report = InstallReport::default();

        for coordinate in &self.pending {
            self.log(&format!("Loading dependency {}", coordinate));

            let target = self.cache.entry_path(coordinate);
            let mut source = ArtifactSource::Cached;
            let mut failure = None;

            // A coordinate without a valid URL is never looked up in the cache
            let url = match resolve_url(coordinate) {
                Ok(url) => Some(url),
                Err(e) => {
                    self.log_failure(coordinate, &e);
                    failure = Some(e.to_string());
                    None
                }
            };

            if let Some(ref url) = url {
                if !target.exists() {
                    source = ArtifactSource::Downloaded;
                    self.log(&format!(
                        "Dependency '{}' is not downloaded. Attempting to download...",
                        coordinate.file_name()
                    ));
                    if let Err(e) = self.download(url, coordinate, &target) {
                        self.log_failure(coordinate, &e);
                        failure = Some(e.to_string());
                    }
                }
            }

            if url.is_none() || !target.exists() {
                let reason = failure.unwrap_or_else(|| "artifact missing after download".into());
                match self.policy {
                    FailurePolicy::Stop => {
                        return Err(FetchError::DependencyUnavailable {
                            coordinate: coordinate.clone(),
                            reason,
                        })
                    }
                    FailurePolicy::Continue => {
                        report.failed.push(FailedArtifact {
                            coordinate: coordinate.clone(),
                            reason,
                        });
                        continue;
                    }
                }
            }

            if source == ArtifactSource::Downloaded {
                self.log(&format!(
                    "Successfully downloaded dependency: {}",
                    coordinate.file_name()
                ));
            }

            installer
                .install(&target)
                .map_err(|e| FetchError::Install {
                    path: target.clone(),
                    source: e,
                })?;

            self.log(&format!(
                "Loaded dependency {} successfully",
                coordinate.file_name()
            ));
            report.installed.push(InstalledArtifact {
                coordinate: coordinate.clone(),
                path: target,
                source,
            });
        }

        Ok(report)
    }

    /// Stream an artifact into the cache. Bytes land in a partial file first
    /// and are renamed into place only after the copy completes.
    fn download(&self, url: &Url, coordinate: &Coordinate, target: &Path) -> FetchResult<u64> {
        let mut reader = self.transport.open(url)?;
        let partial = self.cache.partial_path(coordinate);

        let copied = (|| -> io::Result<u64> {
            let mut file = fs::File::create(&partial)?;
            let copied = io::copy(&mut reader, &mut file)?;
            file.sync_all()?;
            Ok(copied)
        })();

        let copied = match copied {
            Ok(n) => n,
            Err(e) => {
                let _ = fs::remove_file(&partial);
                return Err(FetchError::transfer(url.as_str(), e));
            }
        };

        fs::rename(&partial, target).map_err(|e| {
            let _ = fs::remove_file(&partial);
            FetchError::io(format!("moving download into {}", target.display()), e)
        })?;

        debug!("Wrote {} bytes from {} to {}", copied, url, target.display());
        Ok(copied)
    }

    fn log_failure(&self, coordinate: &Coordinate, error: &FetchError) {
        if self.verbose {
            warn!("Download of {} failed: {}", coordinate.notation(), error);
        } else {
            debug!("Download of {} failed: {}", coordinate.notation(), error);
        }
    }

    fn log(&self, message: &str) {
        if self.verbose {
            info!("{}", message);
        } else {
            debug!("{}", message);
        }
    }
}
