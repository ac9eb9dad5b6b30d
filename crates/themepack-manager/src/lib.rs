//! Theme package management for themepack
//!
//! Installs, uninstalls and update-checks installable theme packages
//! fetched from a package registry or a source repository, and keeps the
//! registry file of installed themes current. The package
//! installer/resolver is an injected [`PackageInstaller`] collaborator;
//! persistence goes through [`themepack_storage`].

pub mod error;
pub mod installer;
pub mod manager;
pub mod manifest;

pub use error::{Result, ThemeError};
pub use installer::{normalize_source, InstalledPackage, PackageInstaller, PackageMetadata};
pub use manager::{ThemeEvent, ThemeRegistryManager};
pub use manifest::{read_manifest, PackageManifest, MANIFEST_FILE_NAME};
pub use themepack_storage::{RegistryStore, ThemeInfoRecord};
