//! Where a new meeting note is written
//!
//! File names are `{date} - {title}.md` inside the configured folder. Titles
//! are not sanitized; whatever the storage layer rejects surfaces as a
//! storage error. Two notes with the same date and title resolve to the same
//! path and the second creation fails.

use crate::domain::models::NOTE_EXTENSION;

/// Resolved folder, file name and full path for one note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDestination {
    pub folder_path: String,
    pub file_name: String,
    pub full_path: String,
}

impl NoteDestination {
    /// Computes the destination for a note created on `date_string`
    pub fn resolve(folder_path: &str, title: &str, date_string: &str) -> Self {
        let file_name = format!("{} - {}.{}", date_string, title, NOTE_EXTENSION);
        let full_path = format!("{}/{}", folder_path, file_name);

        Self {
            folder_path: folder_path.to_string(),
            file_name,
            full_path,
        }
    }
}
