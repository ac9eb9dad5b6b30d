//! Installed-theme records persisted in the registry file

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One entry in the registry file, describing a single installed theme.
///
/// Records are written in insertion order; the file holds a plain JSON
/// array of these objects with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeInfoRecord {
    /// Unique theme identifier: the source the theme was installed from,
    /// either a registry package name or an `owner/repo` reference.
    pub id: String,
    /// Package name declared by the installed package.
    pub name: String,
    /// Installed semantic version.
    pub version: String,
    /// Absolute path of the installed package directory.
    pub location: PathBuf,
    /// Entry-point file within `location`.
    pub main_file: PathBuf,
    /// Human-readable title; falls back to `name` when the package
    /// declares none.
    pub title: String,
    /// Package description; empty when the manifest declares none.
    #[serde(default)]
    pub description: String,
}
