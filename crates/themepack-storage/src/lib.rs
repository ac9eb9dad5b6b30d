//! Registry-file storage for themepack
//!
//! Persists metadata for installed theme packages in a single JSON file
//! (`themes-info.json`) under the themes base directory, and resolves that
//! directory from caller input or the per-user default location.

pub mod error;
pub mod paths;
pub mod records;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use paths::{
    default_themes_dir, expand_tilde, registry_file_path, resolve_base_path, REGISTRY_FILE_NAME,
};
pub use records::ThemeInfoRecord;
pub use store::RegistryStore;
