// Event module
// Calendar event model and its JSON representation

mod draft;

pub use draft::{DraftError, EventDraft};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A timed calendar entry.
///
/// Events carry no identifier: two events are considered to clash when they
/// share the same `date` and `time`. The date and time text an event was read
/// from is written back unchanged as long as it still matches the parsed value.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEvent", into = "StoredEvent")]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Free-form text such as "1h"; empty when not given
    pub duration: String,
    date_text: Option<String>,
    time_text: Option<String>,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.date == other.date
            && self.time == other.time
            && self.duration == other.duration
    }
}

impl Event {
    /// Create a new event
    ///
    /// # Examples
    /// ```
    /// use month_planner::models::event::Event;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let event = Event::new("Standup", date, time).unwrap();
    /// assert_eq!(event.duration, "");
    /// ```
    pub fn new(title: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Result<Self, String> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        Ok(Self {
            title,
            date,
            time,
            duration: String::new(),
            date_text: None,
            time_text: None,
        })
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Whether this event and `other` occupy the same slot
    pub fn same_slot(&self, other: &Event) -> bool {
        self.date == other.date && self.time == other.time
    }

    /// Chip label shown in the month grid, e.g. "Standup @ 09:00"
    pub fn label(&self) -> String {
        format!("{} @ {}", self.title, format_time_of_day(self.time))
    }

    /// Date as stored: the text it was read from, or `YYYY-MM-DD`
    pub fn date_text(&self) -> String {
        match &self.date_text {
            Some(raw) if parse_calendar_day(raw) == Some(self.date) => raw.clone(),
            _ => self.date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Time as stored: the text it was read from, or `HH:MM[:SS]`
    pub fn time_text(&self) -> String {
        match &self.time_text {
            Some(raw) if parse_time_of_day(raw) == Some(self.time) => raw.clone(),
            _ => format_time_of_day(self.time),
        }
    }
}

/// Parse a calendar day, accepting full date-time strings and truncating them.
pub fn parse_calendar_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|date_time| date_time.date())
}

/// Parse a time of day in `HH:MM` or `HH:MM:SS` form
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S%.f"))
        .ok()
}

/// `HH:MM`, or `HH:MM:SS` when the time has a seconds part
pub fn format_time_of_day(time: NaiveTime) -> String {
    if time.second() == 0 && time.nanosecond() == 0 {
        time.format(TIME_FORMAT).to_string()
    } else {
        time.format("%H:%M:%S%.f").to_string()
    }
}

/// JSON shape of an event
#[derive(Serialize, Deserialize)]
struct StoredEvent {
    title: String,
    date: String,
    time: String,
    #[serde(default, deserialize_with = "scalar_text")]
    duration: String,
}

impl TryFrom<StoredEvent> for Event {
    type Error = String;

    fn try_from(stored: StoredEvent) -> Result<Self, Self::Error> {
        let date = parse_calendar_day(&stored.date)
            .ok_or_else(|| format!("invalid date '{}'", stored.date))?;
        let time = parse_time_of_day(&stored.time)
            .ok_or_else(|| format!("invalid time '{}'", stored.time))?;

        Ok(Self {
            title: stored.title,
            date,
            time,
            duration: stored.duration,
            date_text: Some(stored.date),
            time_text: Some(stored.time),
        })
    }
}

impl From<Event> for StoredEvent {
    fn from(event: Event) -> Self {
        Self {
            date: event.date_text(),
            time: event.time_text(),
            title: event.title,
            duration: event.duration,
        }
    }
}

/// Any JSON scalar as text; `null` becomes empty
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
        Null(()),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
        Scalar::Flag(flag) => flag.to_string(),
        Scalar::Null(()) => String::new(),
    })
}
