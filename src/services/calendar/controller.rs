use super::grid::MonthGrid;
use crate::models::event::{DraftError, Event, EventDraft};
use crate::services::event::{self, EventStore};
use crate::services::export::ExportService;
use crate::services::storage::{KeyValueStore, StorageError};
use crate::utils::date::{ChronoDates, DateUtils, TimeUnit};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

/// Result of reading the persisted collection at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted events were adopted
    Persisted(usize),
    /// Nothing usable was stored; the fallback source should be tried
    NeedsFallback,
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    /// Title, date or time missing; nothing changed
    Incomplete,
    /// Date or time text could not be parsed; nothing changed
    Invalid(String),
}

/// Owns the month cursor, the event collection and the form draft
pub struct CalendarController<S: KeyValueStore, D: DateUtils = ChronoDates> {
    store: EventStore<S>,
    dates: D,
    month_cursor: NaiveDate,
    events: Vec<Event>,
    draft: EventDraft,
    /// Set once the user adds or clears; a late fallback result is then ignored
    user_modified: bool,
}

impl<S: KeyValueStore, D: DateUtils> CalendarController<S, D> {
    pub fn new(store: S, dates: D, today: NaiveDate) -> Self {
        let month_cursor = dates.start_of(today, TimeUnit::Month);
        Self {
            store: EventStore::new(store),
            dates,
            month_cursor,
            events: Vec::new(),
            draft: EventDraft::default(),
            user_modified: false,
        }
    }

    /// Adopt the persisted collection if it exists and is non-empty.
    ///
    /// A malformed stored value is treated as absent.
    pub fn load_persisted(&mut self) -> LoadOutcome {
        match self.store.load() {
            Ok(Some(events)) if !events.is_empty() => {
                log::info!("Loaded {} persisted events", events.len());
                let count = events.len();
                self.events = events;
                LoadOutcome::Persisted(count)
            }
            Ok(_) => {
                log::info!("No persisted events found");
                LoadOutcome::NeedsFallback
            }
            Err(StorageError::Corrupt { key, source }) => {
                log::warn!("Ignoring malformed persisted value for '{}': {}", key, source);
                LoadOutcome::NeedsFallback
            }
            Err(e) => {
                log::error!("Failed to read persisted events: {}", e);
                LoadOutcome::NeedsFallback
            }
        }
    }

    /// Apply the outcome of the one-shot fallback load.
    ///
    /// Returns true when the collection was replaced.
    pub fn apply_fallback(&mut self, result: Result<Vec<Event>>) -> bool {
        match result {
            Ok(events) if self.user_modified => {
                log::info!(
                    "Discarding {} fallback events; collection changed before they arrived",
                    events.len()
                );
                false
            }
            Ok(events) => {
                log::info!("Loaded {} fallback events", events.len());
                self.events = events;
                true
            }
            Err(e) => {
                log::warn!("No static events loaded: {:#}", e);
                false
            }
        }
    }

    pub fn month_cursor(&self) -> NaiveDate {
        self.month_cursor
    }

    /// e.g. "March 2024"
    pub fn month_title(&self) -> String {
        self.dates.format(self.month_cursor, "%B %Y")
    }

    pub fn month_grid(&self, today: NaiveDate) -> MonthGrid {
        MonthGrid::build(self.month_cursor, today, &self.dates)
    }

    pub fn previous_month(&mut self) {
        self.month_cursor = self.dates.subtract(self.month_cursor, 1, TimeUnit::Month);
    }

    pub fn next_month(&mut self) {
        self.month_cursor = self.dates.add(self.month_cursor, 1, TimeUnit::Month);
    }

    pub fn go_to_month(&mut self, date: NaiveDate) {
        self.month_cursor = self.dates.start_of(date, TimeUnit::Month);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        event::events_for_date(&self.events, date)
    }

    pub fn conflict_count(&self) -> usize {
        event::conflicting_slots(&self.events).len()
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EventDraft {
        &mut self.draft
    }

    /// Turn the draft into an event, persist the updated collection and reset the draft.
    ///
    /// On a storage error the collection and draft are left untouched.
    pub fn submit_draft(&mut self) -> Result<SubmitOutcome, StorageError> {
        let event = match self.draft.to_event() {
            Ok(event) => event,
            Err(DraftError::Incomplete) => return Ok(SubmitOutcome::Incomplete),
            Err(e) => return Ok(SubmitOutcome::Invalid(e.to_string())),
        };

        let title = event.title.clone();
        let mut updated = self.events.clone();
        updated.push(event);
        self.store.save(&updated)?;

        log::info!("Added event '{}'", title);
        self.events = updated;
        self.draft.clear();
        self.user_modified = true;
        Ok(SubmitOutcome::Added)
    }

    pub fn export_json(&self) -> Result<String> {
        ExportService::to_json(&self.events)
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        ExportService::export_to_file(&self.events, path)
    }

    /// Remove the persisted collection and empty the in-memory one
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.store.clear()?;
        log::info!("Cleared {} events", self.events.len());
        self.events.clear();
        self.user_modified = true;
        Ok(())
    }

    pub fn store(&self) -> &S {
        self.store.inner()
    }
}
