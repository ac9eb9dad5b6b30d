//! Themes base-directory resolution
//!
//! The themes directory is either supplied by the caller (with `~`
//! expanding to the home directory) or defaults to a per-user data
//! location.

use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};

/// File name of the theme registry inside the themes base directory.
pub const REGISTRY_FILE_NAME: &str = "themes-info.json";

/// Expands a leading `~` against the user's home directory.
///
/// Paths without a `~` prefix pass through unchanged.
pub fn expand_tilde(path: &str) -> StorageResult<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };
    let home = dirs::home_dir()
        .ok_or_else(|| StorageError::path_resolution_error("Home directory not found"))?;
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Resolves the themes base directory from an optional caller override.
pub fn resolve_base_path(base: Option<&str>) -> StorageResult<PathBuf> {
    match base {
        Some(path) => expand_tilde(path),
        None => default_themes_dir(),
    }
}

/// Default themes directory under the per-user data location.
pub fn default_themes_dir() -> StorageResult<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| StorageError::path_resolution_error("User data directory not found"))?;
    dir.push("themepack");
    dir.push("themes");
    Ok(dir)
}

/// Path of the registry file inside a themes base directory.
pub fn registry_file_path(base: &Path) -> PathBuf {
    base.join(REGISTRY_FILE_NAME)
}
