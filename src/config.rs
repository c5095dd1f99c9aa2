//! Persisted settings
//!
//! Settings live in a single `settings.json`. Keys missing from the file
//! take their default values, so older files keep loading as fields are
//! added.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const APP_DIR_NAME: &str = "meeting-notes";

/// File name of the settings document
pub const SETTINGS_FILE: &str = "settings.json";

/// Default folder notes are created in
pub const DEFAULT_MEETING_FOLDER: &str = "Templates/Meetings";

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub my_setting: String,
    /// Vault-relative folder new notes are written into
    pub meeting_template_folder: String,
    /// Stored for compatibility; only one layout exists
    pub default_template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            my_setting: "default".to_string(),
            meeting_template_folder: DEFAULT_MEETING_FOLDER.to_string(),
            default_template: "default-meeting".to_string(),
        }
    }
}

impl Settings {
    /// Sets the output folder (builder pattern)
    pub fn with_meeting_folder(mut self, folder: impl Into<String>) -> Result<Self> {
        self.set_meeting_folder(folder)?;
        Ok(self)
    }

    /// Updates the output folder; blank values are rejected
    pub fn set_meeting_folder(&mut self, folder: impl Into<String>) -> Result<()> {
        let folder = normalize_folder(&folder.into());
        if folder.is_empty() {
            return Err(AppError::InvalidInput(
                "Meeting folder cannot be empty".to_string(),
            ));
        }
        self.meeting_template_folder = folder;
        Ok(())
    }
}

/// Trims whitespace and surrounding slashes from a vault-relative folder
fn normalize_folder(folder: &str) -> String {
    folder.trim().trim_matches('/').to_string()
}

/// Platform config directory for this tool.
///
/// - Linux: `~/.config/meeting-notes/` (or `$XDG_CONFIG_HOME`)
/// - macOS: `~/Library/Application Support/meeting-notes/`
/// - Windows: `%APPDATA%/meeting-notes/`
///
/// Falls back to `~/.meeting-notes/` when no platform dir is known.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(format!(".{}", APP_DIR_NAME))
        })
}

/// Loads and saves [`Settings`] as JSON
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config directory
    pub fn in_default_location() -> Self {
        Self::new(default_config_dir().join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads settings, merged over defaults.
    ///
    /// A missing file yields defaults. A corrupt file is logged and also
    /// yields defaults so the tool stays usable. A blank meeting folder is
    /// replaced by the default folder the same way.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => Ok(self.with_valid_folder(settings)),
            Err(e) => {
                log::warn!(
                    "Corrupt settings {}: {}. Using defaults.",
                    self.path.display(),
                    e
                );
                Ok(Settings::default())
            }
        }
    }

    fn with_valid_folder(&self, mut settings: Settings) -> Settings {
        let folder = normalize_folder(&settings.meeting_template_folder);
        if folder.is_empty() {
            log::warn!(
                "Blank meeting folder in {}. Using {}.",
                self.path.display(),
                DEFAULT_MEETING_FOLDER
            );
            settings.meeting_template_folder = DEFAULT_MEETING_FOLDER.to_string();
        } else {
            settings.meeting_template_folder = folder;
        }
        settings
    }

    /// Writes settings (temp file + rename)
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&dir)?;

        let json = serde_json::to_string_pretty(settings)?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AppError::Config(format!("Invalid settings path: {}", self.path.display())))?
            .to_string_lossy()
            .to_string();
        let temp = dir.join(format!("{}.tmp.{}", file_name, std::process::id()));

        std::fs::write(&temp, json)?;
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            let _ = std::fs::remove_file(&temp);
            return Err(AppError::Config(format!("Failed to commit settings: {}", e)));
        }

        log::info!("Settings saved to {}", self.path.display());
        Ok(())
    }
}
