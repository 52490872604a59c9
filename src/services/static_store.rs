//! Binary asset storage for posters, stills and person photos.
//!
//! Content rows reference assets by id (a relative path such as
//! `posters/1.jpg`). The store maps ids to bytes on disk and to public URLs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StaticError {
    #[error("Invalid asset path: {0}")]
    InvalidPath(String),

    #[error("Storage error: {0}")]
    Io(String),
}

impl From<anyhow::Error> for StaticError {
    fn from(err: anyhow::Error) -> Self {
        Self::Io(format!("{err:#}"))
    }
}

#[async_trait]
pub trait StaticStore: Send + Sync {
    /// Writes `bytes` under `path`, replacing an existing asset.
    async fn put(&self, path: &str, bytes: Vec<u8>) -> Result<(), StaticError>;

    /// Returns the asset bytes, `None` when nothing is stored under `path`.
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StaticError>;

    /// Public URL of an asset id.
    fn url_for(&self, asset_id: &str) -> String;
}

/// Stores assets as files below a root directory.
pub struct FsStaticStore {
    root: PathBuf,
    url_prefix: String,
}

impl FsStaticStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: &str) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Joins `path` onto the root, refusing anything that could escape it.
    fn resolve(&self, path: &str) -> Result<PathBuf, StaticError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut clean = PathBuf::new();

        for component in relative.components() {
            match component {
                Component::Normal(part) => clean.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(StaticError::InvalidPath(path.to_string()));
                }
            }
        }

        if clean.as_os_str().is_empty() {
            return Err(StaticError::InvalidPath(path.to_string()));
        }

        Ok(self.root.join(clean))
    }
}

#[async_trait]
impl StaticStore for FsStaticStore {
    async fn put(&self, path: &str, bytes: Vec<u8>) -> Result<(), StaticError> {
        let file_path = self.resolve(path)?;

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&file_path, &bytes)
            .await
            .with_context(|| format!("Failed to write asset to {}", file_path.display()))?;

        info!(path = %file_path.display(), size = bytes.len(), "Stored asset");
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StaticError> {
        let file_path = self.resolve(path)?;

        match fs::read(&file_path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %file_path.display(), "Asset not found");
                Ok(None)
            }
            Err(err) => Err(StaticError::Io(format!(
                "Failed to read {}: {err}",
                file_path.display()
            ))),
        }
    }

    fn url_for(&self, asset_id: &str) -> String {
        format!("{}/{}", self.url_prefix, asset_id.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_returns_the_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStaticStore::new(dir.path(), "/static");

        store.put("posters/1.jpg", vec![1, 2, 3]).await.unwrap();

        assert_eq!(store.get("posters/1.jpg").await.unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.get("posters/2.jpg").await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejects_paths_escaping_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStaticStore::new(dir.path(), "/static");

        for path in ["../secret", "posters/../../x", ""] {
            assert!(matches!(
                store.get(path).await,
                Err(StaticError::InvalidPath(_))
            ));
        }
        assert!(store.put("a/../../b", vec![0]).await.is_err());
    }

    #[test]
    fn urls_join_prefix_and_asset_id() {
        let store = FsStaticStore::new("/tmp", "https://cdn.example.com/assets/");
        assert_eq!(
            store.url_for("posters/1.jpg"),
            "https://cdn.example.com/assets/posters/1.jpg"
        );
        assert_eq!(FsStaticStore::new("/tmp", "/static").url_for("/a.png"), "/static/a.png");
    }
}
