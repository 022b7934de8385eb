//! CLI command implementations

pub mod cache;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod list;
pub mod url;

pub use cache::execute as cache;
pub use catalog::execute as catalog;
pub use config::execute as config;
pub use fetch::execute as fetch;
pub use list::execute as list;
pub use url::execute as url;

use crate::catalog::KnownDependency;
use crate::cli::args::DependencyArgs;
use crate::config::Config;
use crate::coordinate::Coordinate;
use crate::error::{FetchError, FetchResult};
use crate::manifest::{find_manifest, DependencyManifest};
use tracing::debug;

/// Collect requested coordinates: manifest entries, then positional
/// coordinates, then `--known` entries. Duplicates are left for the
/// manager to drop.
fn requested_coordinates(args: &DependencyArgs, config: &Config) -> FetchResult<Vec<Coordinate>> {
    let default_repository = &config.fetch.default_repository;
    let mut coordinates = Vec::new();

    let manifest_path = if args.no_manifest {
        None
    } else if let Some(ref path) = args.manifest {
        Some(path.clone())
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| FetchError::io("getting current directory", e))?;
        find_manifest(&cwd)
    };

    if let Some(path) = manifest_path {
        debug!("Reading manifest {}", path.display());
        let manifest = DependencyManifest::from_file(&path)?;
        coordinates.extend(manifest.coordinates(default_repository)?);
    }

    for notation in &args.coordinates {
        coordinates.push(Coordinate::parse(notation, default_repository)?);
    }

    for name in &args.known {
        let known: KnownDependency = name.parse()?;
        coordinates.push(known.coordinate());
    }

    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_all_sources_in_order() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("deps.toml");
        fs::write(
            &manifest,
            "[[dependency]]\ngroup = \"a.b\"\nartifact = \"from-manifest\"\nversion = \"1\"\n",
        )
        .unwrap();

        let args = DependencyArgs {
            coordinates: vec!["c.d:positional:2".to_string()],
            manifest: Some(manifest),
            no_manifest: false,
            known: vec!["asm".to_string()],
        };
        let coordinates = requested_coordinates(&args, &Config::default()).unwrap();

        let artifacts: Vec<_> = coordinates.iter().map(|c| c.artifact_id()).collect();
        assert_eq!(artifacts, vec!["from-manifest", "positional", "asm"]);
    }

    #[test]
    fn positional_uses_configured_repository() {
        let mut config = Config::default();
        config.fetch.default_repository = "https://mirror.example.com/m2".to_string();
        let args = DependencyArgs {
            coordinates: vec!["c.d:e:2".to_string()],
            no_manifest: true,
            ..Default::default()
        };

        let coordinates = requested_coordinates(&args, &config).unwrap();
        assert_eq!(coordinates[0].repository(), "https://mirror.example.com/m2");
    }

    #[test]
    fn unknown_catalog_entry_fails() {
        let args = DependencyArgs {
            known: vec!["left-pad".to_string()],
            no_manifest: true,
            ..Default::default()
        };
        assert!(matches!(
            requested_coordinates(&args, &Config::default()).unwrap_err(),
            FetchError::UnknownCatalogEntry(_)
        ));
    }
}
