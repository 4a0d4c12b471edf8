use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::overpass::fetch_drive_network;
use crate::store::save_network;

const DATA_DIR_ENV: &str = "DZROUTE_DATA_DIR";

/// Resolve the default cache path for a city's road network database.
///
/// Honors the `DZROUTE_DATA_DIR` environment variable before falling back to
/// the platform-specific project data directory.
pub fn default_network_path(city: &str) -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir).join(network_filename(city)));
    }

    let dirs =
        ProjectDirs::from("com", "dzroute", "dzroute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(network_filename(city)))
}

/// Ensure the road network for `city` is cached locally and return its path.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `DZROUTE_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
///
/// When no cached database exists at the resolved path the network is fetched
/// from the provider and written atomically through a temporary file, so an
/// interrupted download never leaves a truncated cache behind.
pub fn ensure_city_network(city: &str, target: Option<&Path>) -> Result<PathBuf> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => default_network_path(city)?,
    };

    if path.exists() {
        debug!(path = %path.display(), "using cached road network");
        return Ok(path);
    }

    let network = fetch_drive_network(city)?;

    let parent = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&parent)?;

    let staged = NamedTempFile::new_in(&parent)?;
    save_network(staged.path(), &network)?;
    staged.persist(&path).map_err(|err| err.error)?;

    info!(
        city,
        path = %path.display(),
        nodes = network.node_count(),
        "cached road network"
    );
    Ok(path)
}

fn network_filename(city: &str) -> String {
    format!("{}.db", slugify(city))
}

/// Lowercase the city name and collapse anything that is not ASCII
/// alphanumeric into single dashes, yielding a stable cache filename.
fn slugify(city: &str) -> String {
    let mut slug = String::with_capacity(city.len());
    let mut pending_dash = false;
    for ch in city.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("network");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Bordj Bou Arreridj"), "bordj-bou-arreridj");
        assert_eq!(slugify("  Sidi Bel Abbes  "), "sidi-bel-abbes");
        assert_eq!(slugify("Alger"), "alger");
    }

    #[test]
    fn slugify_never_returns_empty() {
        assert_eq!(slugify("??"), "network");
    }

    #[test]
    fn network_filename_has_db_extension() {
        assert_eq!(network_filename("Tizi Ouzou"), "tizi-ouzou.db");
    }
}
