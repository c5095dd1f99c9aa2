/// Domain layer - note content and destination logic
///
/// Everything here is pure and host-agnostic.
pub mod destination;
pub mod form;
pub mod models;
pub mod template;

pub use destination::NoteDestination;
pub use form::{MeetingForm, RowList, MISSING_TITLE_MESSAGE};
pub use models::{MeetingInput, MeetingRecord};
pub use template::NoteTemplate;
