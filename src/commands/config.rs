//! Settings commands

use crate::config::Settings;
use crate::AppState;

/// Returns a copy of the current settings
pub async fn get_settings(state: &AppState) -> Settings {
    state.settings.read().await.clone()
}

/// Changes the folder new notes are created in and persists the change
pub async fn set_meeting_folder(state: &AppState, folder: String) -> Result<Settings, String> {
    let mut settings = state.settings.write().await;
    let mut updated = settings.clone();
    updated
        .set_meeting_folder(folder)
        .map_err(|e| e.to_string())?;

    if let Some(store) = &state.settings_store {
        store.save(&updated).map_err(|e| e.to_string())?;
    }

    log::info!(
        "Meeting folder set to {}",
        updated.meeting_template_folder
    );
    *settings = updated.clone();
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingsStore;
    use crate::ports::mocks::{FixedClock, MockVault, MockWorkspace, RecordingNotifier};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn state(store: Option<SettingsStore>) -> AppState {
        let vault = MockVault::new();
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        );
        let state = AppState::new(
            Arc::new(vault.clone()),
            Arc::new(MockWorkspace::new(&vault)),
            Arc::new(RecordingNotifier::new()),
            Arc::new(clock),
            Settings::default(),
        );
        match store {
            Some(store) => state.with_settings_store(store),
            None => state,
        }
    }

    #[tokio::test]
    async fn test_set_folder_updates_and_persists() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let state = state(Some(store.clone()));

        let updated = set_meeting_folder(&state, "Team/Meetings".to_string())
            .await
            .unwrap();

        assert_eq!(updated.meeting_template_folder, "Team/Meetings");
        assert_eq!(get_settings(&state).await, updated);
        assert_eq!(store.load().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_blank_folder_leaves_settings_untouched() {
        let state = state(None);

        let result = set_meeting_folder(&state, "   ".to_string()).await;

        assert!(result.is_err());
        assert_eq!(get_settings(&state).await, Settings::default());
    }
}
