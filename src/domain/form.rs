//! Form state for collecting a meeting note request
//!
//! The form owns ordered participant and agenda rows. Views re-derive their
//! rows from [`MeetingForm::participants`] and [`MeetingForm::agenda`] after
//! every change instead of keeping their own copies.

use crate::domain::models::MeetingInput;
use crate::error::{AppError, Result};

/// Shown when the form is submitted without a title
pub const MISSING_TITLE_MESSAGE: &str = "Please enter a meeting title";

/// Which list a row operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowList {
    Participants,
    Agenda,
}

/// Editable state behind the "Create Meeting Note" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingForm {
    title: String,
    participants: Vec<String>,
    agenda: Vec<String>,
}

impl Default for MeetingForm {
    /// A fresh form starts with one empty row in each list
    fn default() -> Self {
        Self {
            title: String::new(),
            participants: vec![String::new()],
            agenda: vec![String::new()],
        }
    }
}

impl MeetingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn agenda(&self) -> &[String] {
        &self.agenda
    }

    fn rows_mut(&mut self, list: RowList) -> &mut Vec<String> {
        match list {
            RowList::Participants => &mut self.participants,
            RowList::Agenda => &mut self.agenda,
        }
    }

    /// Appends an empty row and returns its index
    pub fn add_row(&mut self, list: RowList) -> usize {
        let rows = self.rows_mut(list);
        rows.push(String::new());
        rows.len() - 1
    }

    /// Replaces the text of an existing row
    pub fn update_row(&mut self, list: RowList, index: usize, value: impl Into<String>) -> Result<()> {
        let rows = self.rows_mut(list);
        let row = rows
            .get_mut(index)
            .ok_or_else(|| AppError::NotFound(format!("{:?} row {}", list, index)))?;
        *row = value.into();
        Ok(())
    }

    /// Removes a row; later rows shift up by one
    pub fn remove_row(&mut self, list: RowList, index: usize) -> Result<String> {
        let rows = self.rows_mut(list);
        if index >= rows.len() {
            return Err(AppError::NotFound(format!("{:?} row {}", list, index)));
        }
        Ok(rows.remove(index))
    }

    /// Validates the title and returns the input with blank rows dropped
    pub fn submit(&self) -> Result<MeetingInput> {
        let input = MeetingInput::new(self.title.clone(), &self.participants, &self.agenda);
        if !input.has_title() {
            return Err(AppError::InvalidInput(MISSING_TITLE_MESSAGE.to_string()));
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_has_one_empty_row_each() {
        let form = MeetingForm::new();
        assert_eq!(form.participants(), &[String::new()]);
        assert_eq!(form.agenda(), &[String::new()]);
        assert_eq!(form.title(), "");
    }

    #[test]
    fn test_add_update_remove_rows() {
        let mut form = MeetingForm::new();
        form.update_row(RowList::Participants, 0, "Alice").unwrap();
        let second = form.add_row(RowList::Participants);
        form.update_row(RowList::Participants, second, "Bob").unwrap();
        let third = form.add_row(RowList::Participants);
        form.update_row(RowList::Participants, third, "Carol").unwrap();

        let removed = form.remove_row(RowList::Participants, 1).unwrap();

        assert_eq!(removed, "Bob");
        assert_eq!(form.participants(), &["Alice".to_string(), "Carol".to_string()]);
        assert_eq!(form.agenda(), &[String::new()]);
    }

    #[test]
    fn test_out_of_range_rows_are_rejected() {
        let mut form = MeetingForm::new();
        assert!(matches!(
            form.update_row(RowList::Agenda, 3, "Budget"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            form.remove_row(RowList::Agenda, 1),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_submit_requires_title() {
        let mut form = MeetingForm::new();
        form.set_title("   ");

        match form.submit() {
            Err(AppError::InvalidInput(message)) => assert_eq!(message, MISSING_TITLE_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_filters_blank_rows() {
        let mut form = MeetingForm::new();
        form.set_title("Weekly Sync");
        form.update_row(RowList::Participants, 0, "Alice").unwrap();
        form.add_row(RowList::Participants);
        let idx = form.add_row(RowList::Participants);
        form.update_row(RowList::Participants, idx, "Bob").unwrap();

        let input = form.submit().unwrap();

        assert_eq!(input.title, "Weekly Sync");
        assert_eq!(input.participants, vec!["Alice", "Bob"]);
        assert!(input.agenda.is_empty());
    }
}
