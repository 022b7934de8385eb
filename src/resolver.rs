//! Coordinate resolution
//!
//! Maps a coordinate onto the Maven repository layout:
//! `{repository}/{group as path}/{artifact}/{version}/{artifact}-{version}.jar`

use crate::coordinate::{check_segment, Coordinate};
use crate::error::{FetchError, FetchResult};
use url::Url;

/// Resolve the download URL of a coordinate.
///
/// The repository base may or may not end with `/`; both resolve to the same
/// URL. Only `http` and `https` repositories are accepted.
pub fn resolve_url(coordinate: &Coordinate) -> FetchResult<Url> {
    // Url::parse collapses dot segments, so they are rejected up front
    let group_path = coordinate.group_id().replace('.', "/");
    for segment in group_path.split('/') {
        check_segment("group id segment", segment)
            .map_err(|reason| FetchError::invalid_url(coordinate.notation(), reason))?;
    }

    let artifact = coordinate.artifact_id();
    let version = coordinate.version();
    for (name, value) in [("artifact id", artifact), ("version", version)] {
        check_segment(name, value)
            .map_err(|reason| FetchError::invalid_url(coordinate.notation(), reason))?;
    }

    let raw = format!(
        "{}{}/{}/{}/{}-{}.jar",
        normalize_base(coordinate.repository()),
        group_path,
        artifact,
        version,
        artifact,
        version
    );

    let url = Url::parse(&raw).map_err(|e| FetchError::invalid_url(&raw, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::invalid_url(
                &raw,
                format!("unsupported scheme '{}'", other),
            ))
        }
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::invalid_url(&raw, "repository has no host"));
    }

    Ok(url)
}

/// Repository base with exactly one trailing slash
fn normalize_base(repository: &str) -> String {
    format!("{}/", repository.trim().trim_end_matches('/'))
}
