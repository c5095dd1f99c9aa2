/// Terminal host adapter
///
/// Surfaces notifications on stderr and "opens" notes either by printing
/// their location or by launching the user's editor.
use crate::adapters::storage::FsVaultStorage;
use crate::error::{AppError, Result};
use crate::ports::host::{ClockPort, NotifierPort, WorkspacePort};
use crate::ports::storage::NoteHandle;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::path::PathBuf;
use std::sync::Arc;

/// Writes notifications to stderr
#[derive(Debug, Default, Clone)]
pub struct TerminalNotifier;

impl NotifierPort for TerminalNotifier {
    fn notify(&self, message: &str) {
        log::info!("notice: {}", message);
        eprintln!("{}", message);
    }
}

/// How a created note is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenMode {
    /// Print the note's filesystem path
    PrintPath,
    /// Run the given editor command with the note's path
    Editor(String),
}

impl OpenMode {
    /// Editor from `$VISUAL` or `$EDITOR`, falling back to printing the path
    pub fn from_env() -> Self {
        std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .ok()
            .filter(|editor| !editor.trim().is_empty())
            .map(OpenMode::Editor)
            .unwrap_or(OpenMode::PrintPath)
    }
}

/// Workspace that shows notes from the terminal
pub struct TerminalWorkspace {
    vault: Arc<FsVaultStorage>,
    mode: OpenMode,
}

impl TerminalWorkspace {
    pub fn new(vault: Arc<FsVaultStorage>, mode: OpenMode) -> Self {
        Self { vault, mode }
    }

    fn local_path(&self, handle: &NoteHandle) -> Result<PathBuf> {
        self.vault.resolve(&handle.path)
    }
}

#[async_trait]
impl WorkspacePort for TerminalWorkspace {
    async fn open_file(&self, handle: &NoteHandle) -> Result<()> {
        let path = self.local_path(handle)?;

        match &self.mode {
            OpenMode::PrintPath => {
                println!("{}", path.display());
                Ok(())
            }
            OpenMode::Editor(command) => {
                // Editor commands may carry arguments, e.g. "code --wait"
                let mut parts = command.split_whitespace();
                let program = parts
                    .next()
                    .ok_or_else(|| AppError::Config("Empty editor command".to_string()))?;

                log::debug!("Opening {} with {}", path.display(), command);
                let status = tokio::process::Command::new(program)
                    .args(parts)
                    .arg(&path)
                    .status()
                    .await?;

                if status.success() {
                    Ok(())
                } else {
                    Err(AppError::Other(format!(
                        "Editor '{}' exited with {}",
                        command, status
                    )))
                }
            }
        }
    }
}

/// Local wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_print_path_mode_succeeds() {
        let dir = tempdir().unwrap();
        let vault = Arc::new(FsVaultStorage::new(dir.path()).unwrap());
        let workspace = TerminalWorkspace::new(vault, OpenMode::PrintPath);

        let result = workspace.open_file(&NoteHandle::new("Meetings/note.md")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_editor_is_an_error() {
        let dir = tempdir().unwrap();
        let vault = Arc::new(FsVaultStorage::new(dir.path()).unwrap());
        let workspace = TerminalWorkspace::new(
            vault,
            OpenMode::Editor("definitely-not-an-editor-binary".to_string()),
        );

        let result = workspace.open_file(&NoteHandle::new("note.md")).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_system_clock_is_close_to_now() {
        let before = chrono::Local::now().naive_local();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
