//! Package installer collaborator contract and source normalization

use std::path::PathBuf;

use async_trait::async_trait;
use semver::Version;

use crate::error::Result;

/// Result of a successful package installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// Package name as declared by the installed package.
    pub name: String,
    /// Installed semantic version.
    pub version: String,
    /// Absolute path the package was installed to.
    pub location: PathBuf,
    /// Entry-point file within `location`.
    pub main_file: PathBuf,
}

/// Metadata for the latest resolvable package at a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Resolved package name.
    pub name: String,
    /// Latest resolvable version.
    pub version: Version,
}

/// Resolves, fetches and removes theme packages.
///
/// Implementations wrap a registry client, a repository fetcher or a test
/// double; the manager drives them without knowing which. A `source` of
/// the form produced by [`normalize_source`] carries repository
/// references as a `name#ref` version argument.
#[async_trait]
pub trait PackageInstaller: Send + Sync {
    /// Install the package at `source`, optionally pinned to `version`.
    ///
    /// An unset version lets the installer apply its own latest-version
    /// default.
    async fn install(&self, source: &str, version: Option<&str>) -> Result<InstalledPackage>;

    /// Remove the installed package named `identifier`.
    async fn uninstall(&self, identifier: &str) -> Result<()>;

    /// Query the latest resolvable metadata for `source`.
    async fn query_package(&self, source: &str, version: Option<&str>) -> Result<PackageMetadata>;
}

/// Rewrite an identifier/version pair into installer input.
///
/// Identifiers containing `/` that are not `@`-scoped registry names are
/// repository references: the version defaults to `master` when unset and
/// the pair collapses into a `<identifier>#<ref>` version argument.
/// Everything else passes through unchanged, an unset version included.
pub fn normalize_source(identifier: &str, version: Option<&str>) -> (String, Option<String>) {
    if identifier.contains('/') && !identifier.starts_with('@') {
        let reference = version.unwrap_or("master");
        (
            identifier.to_string(),
            Some(format!("{}#{}", identifier, reference)),
        )
    } else {
        (identifier.to_string(), version.map(str::to_string))
    }
}
