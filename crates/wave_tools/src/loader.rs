//! Catalog and plan loading.
//!
//! `wave_core` performs no IO; this module reads RON files from disk and
//! hands their contents to the core parsers.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use wave_core::data::{UnitCatalog, WavePlan};
use wave_core::error::WaveError;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "WAVE_DATA_DIR";

/// Errors that can occur while loading data files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a file or directory.
    #[error("IO error reading '{path}': {message}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// Directory not found.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    /// File contents were rejected by the core.
    #[error(transparent)]
    Data(#[from] WaveError),
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load a unit catalog from a RON file.
pub fn load_catalog(path: &Path) -> Result<UnitCatalog, LoadError> {
    let content = read(path)?;
    Ok(UnitCatalog::parse(&content, &path.display().to_string())?)
}

/// Load a wave plan from a RON file.
pub fn load_plan(path: &Path) -> Result<WavePlan, LoadError> {
    let content = read(path)?;
    Ok(WavePlan::parse(&content, &path.display().to_string())?)
}

/// Load every `.ron` catalog in a directory into one catalog.
///
/// Files are merged in file name order. Files that fail to load are
/// skipped with a warning.
pub fn load_catalog_directory(dir: &Path) -> Result<UnitCatalog, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.display().to_string()));
    }

    let io_error = |e: std::io::Error| LoadError::Io {
        path: dir.display().to_string(),
        message: e.to_string(),
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.extension().is_some_and(|e| e == "ron") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut units = Vec::new();
    for path in &paths {
        match load_catalog(path) {
            Ok(catalog) => {
                tracing::debug!(path = %path.display(), units = catalog.units.len(), "Loaded catalog");
                units.extend(catalog.units);
            }
            Err(e) => {
                tracing::warn!("Failed to load catalog from {}: {}", path.display(), e);
            }
        }
    }

    Ok(UnitCatalog::new(units))
}

/// Load a catalog from a file, or merge a directory of catalogs.
pub fn load_catalog_path(path: &Path) -> Result<UnitCatalog, LoadError> {
    if path.is_dir() {
        load_catalog_directory(path)
    } else {
        load_catalog(path)
    }
}

/// Resolve the default data directory.
///
/// Looks in standard locations:
/// 1. Environment variable `WAVE_DATA_DIR`
/// 2. `./crates/wave_tools/assets/data/` (repo root)
/// 3. `./assets/data/` (running from wave_tools)
pub fn default_data_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        let path = PathBuf::from(dir);
        if path.exists() {
            return Some(path);
        }
    }

    ["crates/wave_tools/assets/data", "assets/data"]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog(Path::new("definitely/not/here.ron")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_missing_directory() {
        let err = load_catalog_directory(Path::new("definitely/not/here")).unwrap_err();
        assert!(matches!(err, LoadError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_default_data_dir_resolution() {
        // Depends on the working directory; only check it doesn't panic.
        if let Some(path) = default_data_dir() {
            assert!(path.exists());
        }
    }
}
