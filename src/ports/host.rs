/// Host port traits
///
/// The surfaces a host application provides around the vault: a view that
/// can show a note, a transient message area, and the current time.
use crate::error::Result;
use crate::ports::storage::NoteHandle;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Port trait for opening notes in a view
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspacePort: Send + Sync {
    /// Open a created note. Callers treat failures as non-fatal.
    async fn open_file(&self, handle: &NoteHandle) -> Result<()>;
}

/// Port trait for short user-facing messages
#[cfg_attr(test, mockall::automock)]
pub trait NotifierPort: Send + Sync {
    /// Fire and forget
    fn notify(&self, message: &str);
}

/// Port trait for the current local time
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
