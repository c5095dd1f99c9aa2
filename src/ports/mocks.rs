//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::host::{ClockPort, NotifierPort, WorkspacePort};
use crate::ports::storage::{NoteHandle, VaultStoragePort};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

/// Calls observed by the mock host, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Exists(String),
    CreateFolder(String),
    CreateFile(String),
    OpenFile(String),
}

/// In-memory vault that records every call
#[derive(Clone, Default)]
pub struct MockVault {
    folders: Arc<Mutex<BTreeSet<String>>>,
    files: Arc<Mutex<BTreeMap<String, String>>>,
    calls: Arc<Mutex<Vec<HostCall>>>,
    fail_create_file: Arc<Mutex<Option<String>>>,
    fail_create_folder: Arc<Mutex<Option<String>>>,
}

impl MockVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vault that already contains `path`
    pub fn with_folder(path: &str) -> Self {
        let vault = Self::new();
        vault.folders.lock().unwrap().insert(path.to_string());
        vault
    }

    /// Makes every `create_file` fail with `message`
    pub fn fail_files_with(&self, message: &str) {
        *self.fail_create_file.lock().unwrap() = Some(message.to_string());
    }

    /// Makes every `create_folder` fail with `message`
    pub fn fail_folders_with(&self, message: &str) {
        *self.fail_create_folder.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn has_folder(&self, path: &str) -> bool {
        self.folders.lock().unwrap().contains(path)
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl VaultStoragePort for MockVault {
    async fn exists(&self, path: &str) -> Result<bool> {
        self.record(HostCall::Exists(path.to_string()));
        Ok(self.folders.lock().unwrap().contains(path)
            || self.files.lock().unwrap().contains_key(path))
    }

    async fn create_folder(&self, path: &str) -> Result<()> {
        self.record(HostCall::CreateFolder(path.to_string()));
        if let Some(message) = self.fail_create_folder.lock().unwrap().clone() {
            return Err(AppError::Storage(message));
        }
        self.folders.lock().unwrap().insert(path.to_string());
        Ok(())
    }

    async fn create_file(&self, path: &str, content: &str) -> Result<NoteHandle> {
        self.record(HostCall::CreateFile(path.to_string()));
        if let Some(message) = self.fail_create_file.lock().unwrap().clone() {
            return Err(AppError::Storage(message));
        }

        let mut files = self.files.lock().unwrap();
        if files.contains_key(path) {
            return Err(AppError::Storage("File already exists".to_string()));
        }
        files.insert(path.to_string(), content.to_string());
        Ok(NoteHandle::new(path))
    }
}

/// Workspace that records opens into a shared vault call log
#[derive(Clone)]
pub struct MockWorkspace {
    vault: MockVault,
    fail_with: Option<String>,
}

impl MockWorkspace {
    pub fn new(vault: &MockVault) -> Self {
        Self {
            vault: vault.clone(),
            fail_with: None,
        }
    }

    pub fn failing(vault: &MockVault, message: &str) -> Self {
        Self {
            vault: vault.clone(),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl WorkspacePort for MockWorkspace {
    async fn open_file(&self, handle: &NoteHandle) -> Result<()> {
        self.vault.record(HostCall::OpenFile(handle.path.clone()));
        match &self.fail_with {
            Some(message) => Err(AppError::Other(message.clone())),
            None => Ok(()),
        }
    }
}

/// Notifier that keeps every message
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Clock pinned to one instant
#[derive(Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl ClockPort for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
