/// Domain models for Meeting Notes
///
/// These models are host-agnostic and describe a single note creation request.
use chrono::NaiveDateTime;

/// Date format used in note bodies and file names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used in note bodies
pub const TIME_FORMAT: &str = "%H:%M";

/// Extension appended to every generated note
pub const NOTE_EXTENSION: &str = "md";

/// Drops blank entries and trims the rest, keeping input order.
pub fn clean_entries<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// What the user submitted for a new meeting note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingInput {
    pub title: String,
    pub participants: Vec<String>,
    pub agenda: Vec<String>,
}

impl MeetingInput {
    /// Creates an input with blank participants and agenda items removed
    ///
    /// The title is kept exactly as typed; it ends up in both the heading
    /// and the file name.
    pub fn new<P, A>(title: impl Into<String>, participants: P, agenda: A) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            title: title.into(),
            participants: clean_entries(participants),
            agenda: clean_entries(agenda),
        }
    }

    /// A title made only of whitespace counts as missing
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Meeting data stamped with a date and time, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRecord {
    pub title: String,
    pub date_string: String,
    pub time_string: String,
    pub participants: Vec<String>,
    pub agenda: Vec<String>,
}

impl MeetingRecord {
    /// Stamps an input with the given instant
    pub fn from_input(input: MeetingInput, at: NaiveDateTime) -> Self {
        Self {
            title: input.title,
            date_string: format_date(at),
            time_string: format_time(at),
            participants: input.participants,
            agenda: input.agenda,
        }
    }
}

/// Formats an instant as `YYYY-MM-DD`
pub fn format_date(at: NaiveDateTime) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Formats an instant as `HH:mm`
pub fn format_time(at: NaiveDateTime) -> String {
    at.format(TIME_FORMAT).to_string()
}
