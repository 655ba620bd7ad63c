// Settings module
// User configuration read from config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_FALLBACK_SOURCE: &str = "events.json";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "calendar-export.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    /// Local JSON file or https:// URL used when nothing is persisted
    pub fallback_source: String,
    /// SQLite file; the platform data directory is used when unset
    pub database_path: Option<PathBuf>,
    pub export_file_name: String,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            fallback_source: DEFAULT_FALLBACK_SOURCE.to_string(),
            database_path: None,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            theme: "light".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        if self.export_file_name.trim().is_empty() {
            return Err("export_file_name cannot be empty".to_string());
        }

        match self.theme.to_lowercase().as_str() {
            "light" | "dark" => Ok(()),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}
