#![allow(dead_code)]

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use tokio::fs;

use crate::error::AppError;

/// Media files exported by recorders, kept under a single downloads root.
#[derive(Clone)]
pub struct StorageService {
    root: Arc<PathBuf>,
}

impl StorageService {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_structure(&self) -> Result<(), AppError> {
        fs::create_dir_all(self.root()).await?;
        Ok(())
    }

    /// Path of a collection entry. Entry names stay inside the root:
    /// empty names, absolute paths and parent components are rejected.
    pub fn media_path(&self, entry_name: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(entry_name);
        if entry_name.is_empty()
            || relative.is_absolute()
            || relative
                .components()
                .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(AppError::BadRequest(format!(
                "invalid media entry name: {entry_name:?}"
            )));
        }
        Ok(self.root().join(relative))
    }

    /// Import a recorded file into the collection and return its absolute
    /// stored path.
    pub async fn save_media(&self, entry_name: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
        let path = self.media_path(entry_name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await?;
        let path = fs::canonicalize(&path).await?;
        Ok(path)
    }

    pub async fn media_exists(&self, entry_name: &str) -> Result<bool, AppError> {
        let path = self.media_path(entry_name)?;
        Ok(fs::try_exists(&path).await?)
    }

    /// Remove the media behind a trip's id, whichever addressing scheme
    /// produced it. Paths outside the root are left alone; returns whether
    /// a file was removed.
    pub async fn remove_media(&self, media_id: &str) -> Result<bool, AppError> {
        let path = match self.media_path(media_id) {
            Ok(path) => path,
            Err(_) => {
                let raw = PathBuf::from(media_id);
                if !raw.starts_with(self.root()) {
                    return Ok(false);
                }
                raw
            }
        };
        if fs::try_exists(&path).await? {
            fs::remove_file(&path).await?;
            return Ok(true);
        }
        Ok(false)
    }
}
