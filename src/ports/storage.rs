/// Vault storage port trait
///
/// Defines the interface for the folder tree notes are written into.
/// Paths are vault-relative and `/`-separated.
/// Implementation: filesystem adapter
use crate::error::Result;
use async_trait::async_trait;

/// Reference to a file the storage layer created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteHandle {
    /// Vault-relative path of the file
    pub path: String,
}

impl NoteHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Port trait for vault storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaultStoragePort: Send + Sync {
    /// Whether a file or folder exists at `path`
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Create a folder, including any missing parents
    async fn create_folder(&self, path: &str) -> Result<()>;

    /// Create a new file; fails if one already exists at `path`
    async fn create_file(&self, path: &str, content: &str) -> Result<NoteHandle>;
}
