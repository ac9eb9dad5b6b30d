//! Theme package install/uninstall/update orchestration

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use semver::Version;
use tracing::{debug, info};

use themepack_storage::{registry_file_path, resolve_base_path, RegistryStore, ThemeInfoRecord};

use crate::error::{Result, ThemeError};
use crate::installer::{normalize_source, InstalledPackage, PackageInstaller};
use crate::manifest;

/// Notification emitted when the set of installed themes changes.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeEvent {
    /// A theme was installed and recorded.
    Added(ThemeInfoRecord),
    /// A theme was uninstalled; carries the requested identifier even
    /// when no registry record matched it.
    Removed(String),
}

/// Type alias for theme event listeners
type EventListeners = Arc<Mutex<Vec<Box<dyn Fn(&ThemeEvent) + Send>>>>;

/// Manages installable theme packages and the registry file recording them.
///
/// Drives an injected [`PackageInstaller`] and persists one
/// [`ThemeInfoRecord`] per installed theme through a [`RegistryStore`].
/// Every operation performs its own full load-modify-store cycle against
/// the registry file; no state is cached between calls, and racing
/// operations against the same file are last-writer-wins.
pub struct ThemeRegistryManager {
    /// Base path of the themes directory
    base_path: PathBuf,
    /// Registry-file persistence
    store: RegistryStore,
    /// Host application's install root, exposed to callers for
    /// absolute-URL resolution only
    app_root: PathBuf,
    /// Package installer collaborator
    installer: Arc<dyn PackageInstaller>,
    /// Theme change listeners
    listeners: EventListeners,
}

impl std::fmt::Debug for ThemeRegistryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistryManager")
            .field("base_path", &self.base_path)
            .field("registry_file", &self.store.path())
            .finish()
    }
}

impl ThemeRegistryManager {
    /// Create a manager rooted at the default per-user themes directory.
    pub fn new(installer: Arc<dyn PackageInstaller>) -> Result<Self> {
        Self::with_base_path(installer, None)
    }

    /// Create a manager rooted at `base_path`.
    ///
    /// A leading `~` expands against the home directory; `None` selects
    /// the default per-user themes directory. The registry file lives at
    /// `<base_path>/themes-info.json`.
    pub fn with_base_path(
        installer: Arc<dyn PackageInstaller>,
        base_path: Option<&str>,
    ) -> Result<Self> {
        let base_path = resolve_base_path(base_path)?;
        let store = RegistryStore::new(registry_file_path(&base_path));
        Ok(Self {
            base_path,
            store,
            app_root: default_app_root(),
            installer,
            listeners: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Override the host application's install root.
    pub fn with_app_root(mut self, app_root: impl Into<PathBuf>) -> Self {
        self.app_root = app_root.into();
        self
    }

    /// Base path of the themes directory.
    pub fn themes_base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the registry file.
    pub fn registry_file_path(&self) -> &Path {
        self.store.path()
    }

    /// Host application's install root.
    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    /// Install a theme package and record it in the registry.
    ///
    /// `identifier` is a registry package name or an `owner/repo`
    /// reference; `version` pins the installed version when set. The
    /// record's title and description come from the installed package's
    /// manifest, falling back to the package name and an empty string.
    ///
    /// Install performs no duplicate-id check: repeated installs under
    /// the same identifier append repeated records.
    pub async fn install(&self, identifier: &str, version: Option<&str>) -> Result<ThemeInfoRecord> {
        let (source, version) = normalize_source(identifier, version);
        info!(
            "Installing theme {} ({})",
            identifier,
            version.as_deref().unwrap_or("latest")
        );

        let package = self.installer.install(&source, version.as_deref()).await?;
        let record = self.build_record(identifier, package).await?;

        let mut themes = self.store.load().await?;
        themes.push(record.clone());
        self.store.store(&themes).await?;

        self.emit(&ThemeEvent::Added(record.clone()));
        Ok(record)
    }

    /// Uninstall a theme package and drop its registry record.
    ///
    /// An identifier with no matching record is not an error; the
    /// registry file is rewritten only when a record was dropped, and the
    /// removal event fires either way.
    pub async fn uninstall(&self, identifier: &str) -> Result<()> {
        info!("Uninstalling theme {}", identifier);
        self.installer.uninstall(identifier).await?;

        let mut themes = self.store.load().await?;
        if let Some(index) = themes.iter().position(|t| t.id == identifier) {
            themes.remove(index);
            self.store.store(&themes).await?;
        } else {
            debug!("No registry record for {}", identifier);
        }

        self.emit(&ThemeEvent::Removed(identifier.to_string()));
        Ok(())
    }

    /// Return the registry record for `identifier`, if any.
    pub async fn get_info(&self, identifier: &str) -> Result<Option<ThemeInfoRecord>> {
        let themes = self.store.load().await?;
        Ok(themes.into_iter().find(|t| t.id == identifier))
    }

    /// Return every recorded theme in insertion order.
    pub async fn list_installed(&self) -> Result<Vec<ThemeInfoRecord>> {
        Ok(self.store.load().await?)
    }

    /// Check whether a strictly newer version of `identifier` is
    /// resolvable remotely.
    ///
    /// The remote query and the local lookup run concurrently and both
    /// must succeed. A missing local record fails with
    /// [`ThemeError::NotInstalled`].
    pub async fn check_update_available(
        &self,
        identifier: &str,
        version: Option<&str>,
    ) -> Result<bool> {
        let (source, version) = normalize_source(identifier, version);
        let (remote, local) = tokio::try_join!(
            self.installer.query_package(&source, version.as_deref()),
            self.get_info(identifier),
        )?;
        let local = local.ok_or_else(|| ThemeError::NotInstalled(identifier.to_string()))?;
        let local_version = Version::parse(&local.version)?;

        let update_available = remote.version > local_version;
        if update_available {
            info!(
                "Update available for {}: {} -> {}",
                identifier, local_version, remote.version
            );
        }
        Ok(update_available)
    }

    /// Register a listener for add/remove notifications.
    pub fn on_theme_event<F>(&self, listener: F) -> Result<()>
    where
        F: Fn(&ThemeEvent) + Send + 'static,
    {
        let mut listeners = self
            .listeners
            .lock()
            .map_err(|e| ThemeError::internal(format!("Failed to lock listeners: {}", e)))?;
        listeners.push(Box::new(listener));
        Ok(())
    }

    /// Build the registry record for a freshly installed package, merging
    /// manifest-declared title and description.
    async fn build_record(
        &self,
        identifier: &str,
        package: InstalledPackage,
    ) -> Result<ThemeInfoRecord> {
        let manifest = manifest::read_manifest(&package.location).await?;
        Ok(ThemeInfoRecord {
            id: identifier.to_string(),
            title: manifest.theme_title.unwrap_or_else(|| package.name.clone()),
            description: manifest.description.unwrap_or_default(),
            name: package.name,
            version: package.version,
            location: package.location,
            main_file: package.main_file,
        })
    }

    fn emit(&self, event: &ThemeEvent) {
        // a poisoned listener lock must not fail a completed operation
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(event);
            }
        }
    }
}

fn default_app_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
