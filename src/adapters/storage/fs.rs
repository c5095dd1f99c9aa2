/// Filesystem vault adapter
///
/// Implements VaultStoragePort on a directory tree. Vault paths are
/// `/`-separated and resolved under the vault root.
use crate::error::{AppError, Result};
use crate::ports::storage::{NoteHandle, VaultStoragePort};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Vault rooted at a local directory
pub struct FsVaultStorage {
    root: PathBuf,
}

impl FsVaultStorage {
    /// Create a vault over `root`; the directory must already exist
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AppError::NotFound(format!(
                "Vault directory {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a vault path onto the filesystem, refusing to leave the root
    pub fn resolve(&self, vault_path: &str) -> Result<PathBuf> {
        let mut resolved = self.root.clone();
        for segment in vault_path.split('/') {
            if segment.is_empty() || segment == "." {
                continue;
            }
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(part)), None) => resolved.push(part),
                _ => {
                    return Err(AppError::InvalidInput(format!(
                        "Path escapes the vault: {}",
                        vault_path
                    )))
                }
            }
        }
        Ok(resolved)
    }
}

#[async_trait]
impl VaultStoragePort for FsVaultStorage {
    async fn exists(&self, path: &str) -> Result<bool> {
        let target = self.resolve(path)?;
        Ok(tokio::fs::try_exists(&target).await?)
    }

    async fn create_folder(&self, path: &str) -> Result<()> {
        let target = self.resolve(path)?;
        tokio::fs::create_dir_all(&target)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create folder {}: {}", path, e)))?;

        log::debug!("Created folder {}", target.display());
        Ok(())
    }

    async fn create_file(&self, path: &str, content: &str) -> Result<NoteHandle> {
        let target = self.resolve(path)?;

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => AppError::AlreadyExists(path.to_string()),
                _ => AppError::Storage(format!("Failed to create {}: {}", path, e)),
            })?;

        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        log::debug!("Wrote {} bytes to {}", content.len(), target.display());
        Ok(NoteHandle::new(path))
    }
}
