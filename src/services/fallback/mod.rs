//! Static fallback event source.
//!
//! Used once at startup when no events are persisted. The load runs on a
//! worker thread and reports a single result back to the UI.

mod fetcher;

pub use fetcher::HttpFallback;

use crate::models::event::Event;
use crate::services::event::decode_events;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// A read-only source of events
#[cfg_attr(test, mockall::automock)]
pub trait FallbackSource {
    /// Human readable location, for logging
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<Vec<Event>>;
}

/// Reads a JSON array of events from a local file
pub struct FileFallback {
    path: PathBuf,
}

impl FileFallback {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FallbackSource for FileFallback {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Event>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read fallback events from {}", self.path.display()))?;
        parse_events(&content)
    }
}

/// Parse a JSON array of events, skipping unreadable elements
pub fn parse_events(content: &str) -> Result<Vec<Event>> {
    decode_events(content).context("Fallback source is not a valid event array")
}

/// Pick the source implementation for a configured location.
///
/// `https://` locations are fetched, plain `http://` is refused and anything
/// else is a file path.
pub fn source_from_location(location: &str) -> Result<Box<dyn FallbackSource + Send>> {
    if location.starts_with("https://") {
        Ok(Box::new(HttpFallback::new(location)?))
    } else if location.starts_with("http://") {
        bail!("Fallback URL must use HTTPS: {}", location)
    } else {
        Ok(Box::new(FileFallback::new(location)))
    }
}

/// One-shot initialization task for the fallback load.
///
/// Outcome contract: `Ok(events)` replaces the collection, `Err(_)` is a no-op
/// for the caller apart from logging.
pub struct InitialLoad {
    rx: Option<Receiver<Result<Vec<Event>>>>,
}

impl InitialLoad {
    pub fn spawn(source: Box<dyn FallbackSource + Send>) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            log::info!("Loading fallback events from {}", source.describe());
            let _ = tx.send(source.fetch());
        });

        Self { rx: Some(rx) }
    }

    /// Returns the result exactly once, when it becomes available
    pub fn poll(&mut self) -> Option<Result<Vec<Event>>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(Err(anyhow::anyhow!("Fallback loader stopped unexpectedly")))
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// Block until the result arrives
    pub fn wait(mut self) -> Result<Vec<Event>> {
        match self.rx.take() {
            Some(rx) => rx
                .recv()
                .unwrap_or_else(|_| Err(anyhow::anyhow!("Fallback loader stopped unexpectedly"))),
            None => Err(anyhow::anyhow!("Fallback result already consumed")),
        }
    }
}
