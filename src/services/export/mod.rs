// Export service module
// Writes the event collection as pretty-printed JSON

use crate::models::event::Event;
use anyhow::{Context, Result};
use std::path::Path;

pub struct ExportService;

impl ExportService {
    /// Serialize events as a JSON array with 2-space indentation
    pub fn to_json(events: &[Event]) -> Result<String> {
        serde_json::to_string_pretty(events).context("Failed to serialize events")
    }

    /// Write the export file, replacing any existing file at `path`
    pub fn export_to_file(events: &[Event], path: &Path) -> Result<()> {
        let json = Self::to_json(events)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write export file {}", path.display()))?;
        log::info!("Exported {} events to {:?}", events.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Event> {
        vec![Event::new(
            "Launch",
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        )
        .unwrap()
        .with_duration("2h")]
    }

    #[test]
    fn test_to_json_is_pretty_printed() {
        let json = ExportService::to_json(&sample()).unwrap();
        let expected = "[\n  {\n    \"title\": \"Launch\",\n    \"date\": \"2024-03-10\",\n    \"time\": \"09:00\",\n    \"duration\": \"2h\"\n  }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_collection_exports_empty_array() {
        assert_eq!(ExportService::to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_export_to_file_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar-export.json");

        ExportService::export_to_file(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Event> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("calendar-export.json");
        assert!(ExportService::export_to_file(&sample(), &path).is_err());
    }
}
