//! Meeting Notes
//!
//! Creates templated meeting notes (title, date/time, participants, agenda,
//! notes, action items, next steps) inside a Markdown vault, and renders the
//! same layout for insertion at an editor cursor.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

use config::{Settings, SettingsStore};
use ports::{ClockPort, NotifierPort, VaultStoragePort, WorkspacePort};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across commands
pub struct AppState {
    pub storage: Arc<dyn VaultStoragePort>,
    pub workspace: Arc<dyn WorkspacePort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub clock: Arc<dyn ClockPort>,
    pub settings: RwLock<Settings>,
    /// Where settings changes are persisted; `None` keeps them in memory
    pub settings_store: Option<SettingsStore>,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn VaultStoragePort>,
        workspace: Arc<dyn WorkspacePort>,
        notifier: Arc<dyn NotifierPort>,
        clock: Arc<dyn ClockPort>,
        settings: Settings,
    ) -> Self {
        Self {
            storage,
            workspace,
            notifier,
            clock,
            settings: RwLock::new(settings),
            settings_store: None,
        }
    }

    /// Persists settings changes through `store` (builder pattern)
    pub fn with_settings_store(mut self, store: SettingsStore) -> Self {
        self.settings_store = Some(store);
        self
    }
}
