//! Install collaborators
//!
//! Making a downloaded artifact usable by the host process is not something
//! this crate knows how to do. The host supplies an [`Installer`]; the manager
//! calls it once per available artifact, in registration order.

use crate::error::InstallError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Capability that installs a local artifact into the running host
pub trait Installer {
    /// Install the artifact at `artifact`. Any error aborts the fetch pass.
    fn install(&mut self, artifact: &Path) -> Result<(), InstallError>;
}

impl<F> Installer for F
where
    F: FnMut(&Path) -> Result<(), InstallError>,
{
    fn install(&mut self, artifact: &Path) -> Result<(), InstallError> {
        self(artifact)
    }
}

/// Installer that collects artifact paths into a classpath
#[derive(Debug, Clone, Default)]
pub struct Classpath {
    entries: Vec<PathBuf>,
}

impl Classpath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installed entries in install order
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries joined with the platform path separator
    pub fn joined(&self) -> Result<OsString, InstallError> {
        std::env::join_paths(&self.entries).map_err(|e| InstallError::new(e.to_string()))
    }
}

impl Installer for Classpath {
    fn install(&mut self, artifact: &Path) -> Result<(), InstallError> {
        if !artifact.is_file() {
            return Err(InstallError::new(format!(
                "{} is not a file",
                artifact.display()
            )));
        }
        if !self.entries.iter().any(|p| p == artifact) {
            self.entries.push(artifact.to_path_buf());
        }
        Ok(())
    }
}
