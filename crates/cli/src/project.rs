//! Project link configuration.
//!
//! Each project keeps its link in `.shopify/project.json`:
//!
//! ```json
//! {
//!   "shop": "snowdevil.myshopify.com",
//!   "storefront": {
//!     "id": "gid://shopify/HydrogenStorefront/1",
//!     "title": "Snowdevil"
//!   }
//! }
//! ```
//!
//! Keys written by other tools are preserved. The `.shopify` directory is
//! added to the project's `.gitignore` whenever the file is written.

use std::path::{Path, PathBuf};

use hydrogen_link_core::{LinkedStorefront, ShopDomain};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_DIR: &str = ".shopify";
const CONFIG_FILE: &str = "project.json";
const GITIGNORE_FILE: &str = ".gitignore";

/// Errors that can occur when reading or writing the link configuration.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Filesystem access failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for this schema.
    #[error("Invalid configuration in {}: {source}", path.display())]
    Parse {
        /// Configuration file.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

/// Contents of `.shopify/project.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Shop the project was last linked against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<ShopDomain>,
    /// Currently linked storefront.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storefront: Option<LinkedStorefront>,
    /// Keys this tool does not manage.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Reads and writes the link configuration of one project directory.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    /// Create a store for the project rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Read the configuration. A missing file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn read(&self) -> Result<ProjectConfig, ProjectError> {
        let path = self.config_path();

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ProjectConfig::default());
            }
            Err(source) => return Err(ProjectError::Io { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(ProjectConfig::default());
        }

        serde_json::from_str(&content).map_err(|source| ProjectError::Parse { path, source })
    }

    /// Overwrite the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory, file, or `.gitignore` cannot be written.
    pub async fn write(&self, config: &ProjectConfig) -> Result<(), ProjectError> {
        let dir = self.root.join(CONFIG_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| ProjectError::Io {
                path: dir.clone(),
                source,
            })?;

        let path = self.config_path();
        let mut content = serde_json::to_string_pretty(config).map_err(|source| {
            ProjectError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        content.push('\n');

        tokio::fs::write(&path, content)
            .await
            .map_err(|source| ProjectError::Io {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "Wrote project configuration");

        self.ensure_gitignored().await
    }

    /// Link `storefront` (on `shop`) to the project, replacing any previous link.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or written.
    pub async fn set_storefront(
        &self,
        shop: &ShopDomain,
        storefront: &LinkedStorefront,
    ) -> Result<(), ProjectError> {
        let mut config = self.read().await?;
        config.shop = Some(shop.clone());
        config.storefront = Some(storefront.clone());
        self.write(&config).await
    }

    /// Remove the storefront link, keeping everything else.
    ///
    /// Returns the storefront that was linked, if any. Nothing is written when
    /// no storefront was linked.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or written.
    pub async fn unset_storefront(&self) -> Result<Option<LinkedStorefront>, ProjectError> {
        let mut config = self.read().await?;
        let previous = config.storefront.take();
        if previous.is_some() {
            self.write(&config).await?;
        }
        Ok(previous)
    }

    async fn ensure_gitignored(&self) -> Result<(), ProjectError> {
        let path = self.root.join(GITIGNORE_FILE);

        let existing = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(source) => return Err(ProjectError::Io { path, source }),
        };

        if existing.lines().any(is_config_dir_pattern) {
            return Ok(());
        }

        let mut updated = existing;
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(CONFIG_DIR);
        updated.push('\n');

        tokio::fs::write(&path, updated)
            .await
            .map_err(|source| ProjectError::Io { path, source })
    }
}

fn is_config_dir_pattern(line: &str) -> bool {
    matches!(
        line.trim(),
        ".shopify" | ".shopify/" | "/.shopify" | "/.shopify/" | ".shopify/*"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hydrogen_link_core::StorefrontId;

    use super::*;

    fn linked(id: &str, title: &str) -> LinkedStorefront {
        LinkedStorefront {
            id: StorefrontId::new(id),
            title: title.to_string(),
        }
    }

    fn shop() -> ShopDomain {
        ShopDomain::parse("snowdevil").unwrap()
    }

    #[tokio::test]
    async fn test_read_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        let config = store.read().await.unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[tokio::test]
    async fn test_set_storefront_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());
        let storefront = linked("gid://shopify/HydrogenStorefront/1", "Snowdevil");

        store.set_storefront(&shop(), &storefront).await.unwrap();

        let config = store.read().await.unwrap();
        assert_eq!(config.shop, Some(shop()));
        assert_eq!(config.storefront, Some(storefront));
    }

    #[tokio::test]
    async fn test_set_storefront_replaces_previous_link() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        store
            .set_storefront(&shop(), &linked("gid://shopify/HydrogenStorefront/1", "Old"))
            .await
            .unwrap();
        store
            .set_storefront(&shop(), &linked("gid://shopify/HydrogenStorefront/2", "New"))
            .await
            .unwrap();

        let config = store.read().await.unwrap();
        assert_eq!(config.storefront.unwrap().title, "New");
    }

    #[tokio::test]
    async fn test_unknown_keys_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());
        std::fs::create_dir_all(dir.path().join(".shopify")).unwrap();
        std::fs::write(
            store.config_path(),
            r#"{"shop":"snowdevil.myshopify.com","customerAccountPush":true}"#,
        )
        .unwrap();

        store
            .set_storefront(&shop(), &linked("gid://shopify/HydrogenStorefront/1", "Snowdevil"))
            .await
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.config_path()).unwrap()).unwrap();
        assert_eq!(raw["customerAccountPush"], serde_json::Value::Bool(true));
        assert_eq!(raw["storefront"]["title"], "Snowdevil");
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());
        std::fs::create_dir_all(dir.path().join(".shopify")).unwrap();
        std::fs::write(store.config_path(), "{ not json").unwrap();

        let err = store.read().await.unwrap_err();
        assert!(matches!(err, ProjectError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_invalid_stored_shop_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());
        std::fs::create_dir_all(dir.path().join(".shopify")).unwrap();
        std::fs::write(store.config_path(), r#"{"shop":"Evil Host/x?y="}"#).unwrap();

        let err = store.read().await.unwrap_err();
        assert!(matches!(err, ProjectError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_stored_shop_is_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());
        std::fs::create_dir_all(dir.path().join(".shopify")).unwrap();
        std::fs::write(store.config_path(), r#"{"shop":"Snowdevil"}"#).unwrap();

        let config = store.read().await.unwrap();
        assert_eq!(config.shop, Some(shop()));
    }

    #[tokio::test]
    async fn test_unset_storefront_keeps_shop() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());
        let storefront = linked("gid://shopify/HydrogenStorefront/1", "Snowdevil");
        store.set_storefront(&shop(), &storefront).await.unwrap();

        let removed = store.unset_storefront().await.unwrap();
        assert_eq!(removed, Some(storefront));

        let config = store.read().await.unwrap();
        assert!(config.storefront.is_none());
        assert_eq!(config.shop, Some(shop()));
    }

    #[tokio::test]
    async fn test_unset_without_link_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        let removed = store.unset_storefront().await.unwrap();
        assert!(removed.is_none());
        assert!(!store.config_path().exists());
    }

    #[tokio::test]
    async fn test_gitignore_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        store.write(&ProjectConfig::default()).await.unwrap();

        let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, ".shopify\n");
    }

    #[tokio::test]
    async fn test_gitignore_appended_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());
        std::fs::write(dir.path().join(".gitignore"), "node_modules\ndist").unwrap();

        store.write(&ProjectConfig::default()).await.unwrap();
        store.write(&ProjectConfig::default()).await.unwrap();

        let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, "node_modules\ndist\n.shopify\n");
    }

    #[tokio::test]
    async fn test_gitignore_existing_pattern_respected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());
        std::fs::write(dir.path().join(".gitignore"), "/.shopify/\n").unwrap();

        store.write(&ProjectConfig::default()).await.unwrap();

        let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, "/.shopify/\n");
    }
}
