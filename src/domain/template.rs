//! Meeting note templates
//!
//! Renders the fixed note layout: title, date/time, participants, agenda,
//! notes, action items and next steps. Everything here is pure; callers
//! supply the already-formatted date and time.

use crate::domain::models::{format_date, format_time, MeetingRecord};
use chrono::NaiveDateTime;

/// The fixed meeting note layout
pub struct NoteTemplate;

impl NoteTemplate {
    /// Renders a complete note for a new file
    ///
    /// Blank participants and agenda items are skipped; agenda numbering
    /// stays contiguous from 1.
    pub fn generate_content(
        title: &str,
        date: &str,
        time: &str,
        participants: &[String],
        agenda: &[String],
    ) -> String {
        let mut content = String::new();

        content.push_str(&format!("# {}\n\n", title));
        content.push_str(&format!("**Date:** {}\n", date));
        content.push_str(&format!("**Time:** {}\n", time));
        content.push_str("**Participants:**\n");

        for participant in non_blank(participants) {
            content.push_str(&format!("- {}\n", participant));
        }

        content.push_str("\n## Agenda\n");
        for (index, item) in non_blank(agenda).enumerate() {
            content.push_str(&format!("{}. {}\n", index + 1, item));
        }

        content.push_str("\n## Notes\n\n");
        content.push_str("## Action Items\n\n");
        content.push_str("- [ ] \n\n");
        content.push_str("## Next Steps\n\n");

        content
    }

    /// Renders a note from a stamped record
    pub fn render(record: &MeetingRecord) -> String {
        Self::generate_content(
            &record.title,
            &record.date_string,
            &record.time_string,
            &record.participants,
            &record.agenda,
        )
    }

    /// Template inserted at the editor cursor
    ///
    /// Uses the given instant for both date and time and leaves one empty
    /// participant bullet and one empty agenda item to fill in.
    pub fn insert_template(at: NaiveDateTime) -> String {
        // Trailing spaces after the placeholders are part of the layout
        format!(
            "## Meeting Notes\n\n\
             **Date:** {date}\n\
             **Time:** {time}\n\
             **Participants:**\n\
             - \n\n\
             ## Agenda\n\
             1. \n\n\
             ## Notes\n\n\n\
             ## Action Items\n\
             - [ ] \n\n\
             ## Next Steps\n\n",
            date = format_date(at),
            time = format_time(at),
        )
    }
}

fn non_blank(entries: &[String]) -> impl Iterator<Item = &str> {
    entries
        .iter()
        .map(String::as_str)
        .filter(|entry| !entry.trim().is_empty())
}
