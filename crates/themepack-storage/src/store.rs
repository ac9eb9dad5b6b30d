//! Flat-file JSON persistence for the theme registry

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::records::ThemeInfoRecord;

/// Load/store helper bound to one registry file.
///
/// The file holds a JSON array of [`ThemeInfoRecord`] values in insertion
/// order. An absent file reads as an empty registry; every store rewrites
/// the full array.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Create a store bound to the registry file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the registry file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records from the registry file.
    pub async fn load(&self) -> StorageResult<Vec<ThemeInfoRecord>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Registry file {} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::Io(e)),
        };
        serde_json::from_str(&content).map_err(|e| {
            StorageError::parse_error(
                self.path.clone(),
                "json",
                format!("Failed to parse theme registry: {}", e),
            )
        })
    }

    /// Persist the full record list back to the registry file.
    pub async fn store(&self, records: &[ThemeInfoRecord]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::directory_creation_failed(parent.to_path_buf(), e))?;
        }
        let content = serde_json::to_string_pretty(records).map_err(|e| {
            StorageError::parse_error(
                self.path.clone(),
                "json",
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(&self.path, content).await.map_err(StorageError::Io)?;
        debug!("Stored {} theme records to {}", records.len(), self.path.display());
        Ok(())
    }
}
