//! Installed-package manifest reading

use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::error::Result;

/// Manifest file name inside an installed package directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Fields consumed from an installed package's manifest.
///
/// Everything else in the file is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Theme title declared by the package, shown instead of the package
    /// name when present.
    pub theme_title: Option<String>,
    /// Package description.
    pub description: Option<String>,
}

/// Read and parse the manifest inside an installed package directory.
///
/// A missing or unreadable manifest is an error; install relies on it for
/// the record's title and description.
pub async fn read_manifest(location: &Path) -> Result<PackageManifest> {
    let path = location.join(MANIFEST_FILE_NAME);
    let content = fs::read_to_string(&path).await?;
    let manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}
