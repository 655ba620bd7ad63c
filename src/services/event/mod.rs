// Event service module
// Persists the event collection under a single storage key

mod queries;

pub use queries::{conflicting_slots, events_for_date, has_conflict};

use crate::models::event::Event;
use crate::services::storage::{KeyValueStore, StorageError};

/// Storage key holding the JSON array of events
pub const STORAGE_KEY: &str = "calendar-events";

/// Reads and writes the whole event collection through a [`KeyValueStore`]
pub struct EventStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> EventStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted collection.
    ///
    /// Returns `Ok(None)` when nothing has been stored and
    /// `Err(StorageError::Corrupt)` when the stored value is not a JSON
    /// array. Unreadable elements are skipped.
    pub fn load(&self) -> Result<Option<Vec<Event>>, StorageError> {
        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(None);
        };

        decode_events(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: STORAGE_KEY.to_string(),
                source,
            })
    }

    /// Overwrite the persisted collection
    pub fn save(&mut self, events: &[Event]) -> Result<(), StorageError> {
        let json = serde_json::to_string(events)?;
        self.store.set(STORAGE_KEY, &json)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(STORAGE_KEY)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}

/// Decode a JSON array of events, skipping elements that are not valid events
pub fn decode_events(raw: &str) -> Result<Vec<Event>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = values.len();

    let events: Vec<Event> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("Skipping unreadable event at index {}: {}", index, e);
                None
            }
        })
        .collect();

    if events.len() < total {
        log::warn!("Kept {} of {} stored events", events.len(), total);
    }
    Ok(events)
}
