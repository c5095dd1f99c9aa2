//! Meeting note commands
//!
//! "Create Meeting Note" and "Insert Meeting Template". Every failure is
//! turned into one user notification here; nothing is retried and a folder
//! created before a failed write is left in place.

use crate::domain::{
    MeetingForm, MeetingInput, MeetingRecord, NoteDestination, NoteTemplate,
    MISSING_TITLE_MESSAGE,
};
use crate::error::Result;
use crate::ports::storage::{NoteHandle, VaultStoragePort};
use crate::AppState;

/// Request to create a new meeting note
#[derive(Debug, Clone, Default)]
pub struct CreateNoteRequest {
    pub title: String,
    pub participants: Vec<String>,
    pub agenda: Vec<String>,
}

impl From<&MeetingForm> for CreateNoteRequest {
    fn from(form: &MeetingForm) -> Self {
        Self {
            title: form.title().to_string(),
            participants: form.participants().to_vec(),
            agenda: form.agenda().to_vec(),
        }
    }
}

/// Ensures the folder exists, then writes the rendered note
///
/// Calls are strictly sequential: exists, create_folder (only when the
/// folder is missing), create_file.
pub async fn write_note(
    storage: &dyn VaultStoragePort,
    folder: &str,
    record: &MeetingRecord,
) -> Result<(NoteDestination, NoteHandle)> {
    let destination = NoteDestination::resolve(folder, &record.title, &record.date_string);

    if !storage.exists(&destination.folder_path).await? {
        log::info!("Creating folder {}", destination.folder_path);
        storage.create_folder(&destination.folder_path).await?;
    }

    let content = NoteTemplate::render(record);
    let handle = storage.create_file(&destination.full_path, &content).await?;

    log::info!("Created meeting note {}", destination.full_path);
    Ok((destination, handle))
}

/// Creates a meeting note in the configured folder and opens it
///
/// Returns the destination on success. On failure the user has already
/// been notified and the returned string carries the same message.
pub async fn create_meeting_note(
    state: &AppState,
    request: CreateNoteRequest,
) -> std::result::Result<NoteDestination, String> {
    let input = MeetingInput::new(request.title, request.participants, request.agenda);
    if !input.has_title() {
        state.notifier.notify(MISSING_TITLE_MESSAGE);
        return Err(MISSING_TITLE_MESSAGE.to_string());
    }

    let folder = state.settings.read().await.meeting_template_folder.clone();
    let record = MeetingRecord::from_input(input, state.clock.now());

    match write_note(state.storage.as_ref(), &folder, &record).await {
        Ok((destination, handle)) => {
            if let Err(e) = state.workspace.open_file(&handle).await {
                log::warn!("Failed to open {}: {}", handle.path, e);
            }
            state
                .notifier
                .notify(&format!("Meeting note created: {}", destination.file_name));
            Ok(destination)
        }
        Err(e) => {
            log::error!("Failed to create meeting note '{}': {}", record.title, e);
            let message = format!("Error creating meeting note: {}", e);
            state.notifier.notify(&message);
            Err(message)
        }
    }
}

/// Submits a filled form
pub async fn submit_meeting_form(
    state: &AppState,
    form: &MeetingForm,
) -> std::result::Result<NoteDestination, String> {
    create_meeting_note(state, CreateNoteRequest::from(form)).await
}

/// Template text for insertion at the editor cursor, stamped with now
pub fn insert_meeting_template(state: &AppState) -> String {
    NoteTemplate::insert_template(state.clock.now())
}
