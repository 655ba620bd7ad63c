// Test fixtures - reusable test data
// Provides consistent events and stores across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use month_planner::models::event::Event;
use month_planner::services::database::Database;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, March 10 2024
    pub fn march_10_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn standup() -> Event {
        Event::new("Standup", dates::march_10_2024(), dates::at(9, 0))
            .unwrap()
            .with_duration("15m")
    }

    /// Same slot as [`standup`]
    pub fn clashing_review() -> Event {
        Event::new("Design Review", dates::march_10_2024(), dates::at(9, 0)).unwrap()
    }

    pub fn leap_day_party() -> Event {
        Event::new("Leap Day Party", dates::leap_day_2024(), dates::at(19, 30))
            .unwrap()
            .with_duration("3h")
    }
}

/// File-backed database in a temporary directory
pub fn temp_database(dir: &tempfile::TempDir) -> Database {
    let path = dir.path().join("calendar.db");
    let db = Database::new(path.to_str().unwrap()).expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}
