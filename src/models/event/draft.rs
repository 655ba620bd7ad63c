use super::{parse_calendar_day, parse_time_of_day, Event, DATE_FORMAT};
use chrono::NaiveDate;

/// Transient form input mirroring the event fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub duration: String,
}

/// Why a draft could not become an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Title, date or time left blank
    Incomplete,
    InvalidDate(String),
    InvalidTime(String),
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::Incomplete => write!(f, "Title, date and time are required"),
            DraftError::InvalidDate(raw) => write!(f, "Invalid date '{}' (expected YYYY-MM-DD)", raw),
            DraftError::InvalidTime(raw) => write!(f, "Invalid time '{}' (expected HH:MM)", raw),
        }
    }
}

impl EventDraft {
    /// Whitespace-only fields count as blank, so a stored title is never
    /// invisible in the grid.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.date.trim().is_empty() && !self.time.trim().is_empty()
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date.format(DATE_FORMAT).to_string();
    }

    /// Parsed draft date, if the text is a valid calendar day
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_calendar_day(&self.date)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Convert the draft into an event without consuming it
    pub fn to_event(&self) -> Result<Event, DraftError> {
        if !self.is_complete() {
            return Err(DraftError::Incomplete);
        }

        let date_text = self.date.trim();
        let time_text = self.time.trim();
        let date = parse_calendar_day(date_text)
            .ok_or_else(|| DraftError::InvalidDate(date_text.to_string()))?;
        let time = parse_time_of_day(time_text)
            .ok_or_else(|| DraftError::InvalidTime(time_text.to_string()))?;

        Ok(Event {
            title: self.title.trim().to_string(),
            date,
            time,
            duration: self.duration.trim().to_string(),
            date_text: Some(date_text.to_string()),
            time_text: Some(time_text.to_string()),
        })
    }
}
