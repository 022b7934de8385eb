//! jarfetch - runtime dependency fetcher
//!
//! Resolves Maven-style coordinates to download URLs, keeps a flat cache
//! of artifact files, downloads whatever is missing and hands every
//! artifact to an [`Installer`] such as a [`Classpath`].

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod install;
pub mod manager;
pub mod manifest;
pub mod resolver;
pub mod transport;
pub mod ui;

pub use catalog::KnownDependency;
pub use coordinate::{Coordinate, DEFAULT_REPOSITORY};
pub use error::{FetchError, FetchResult, InstallError};
pub use install::{Classpath, Installer};
pub use manager::{FailurePolicy, FetchManager, InstallReport};
pub use manifest::DependencyManifest;
pub use resolver::resolve_url;
pub use transport::{HttpTransport, Transport};
