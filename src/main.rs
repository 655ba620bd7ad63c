// Month Planner Application
// Main entry point

use anyhow::{anyhow, Context, Result};
use month_planner::services::database::Database;
use month_planner::services::settings::SettingsService;
use month_planner::ui_egui::CalendarApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Planner");

    let settings_service = SettingsService::from_environment();
    if let Err(e) = settings_service.ensure_exists() {
        log::warn!("Could not write default settings: {:#}", e);
    }
    let settings = settings_service.load_or_default();

    let db_path = SettingsService::resolve_database_path(&settings);
    log::info!("Using database at {}", db_path.display());
    let database = Database::new(&db_path.to_string_lossy())?;
    database
        .initialize_schema()
        .context("Failed to initialize database schema")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Month Planner"),
        ..Default::default()
    };

    eframe::run_native(
        "Month Planner",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings, database)))),
    )
    .map_err(|e| anyhow!("Failed to run the calendar window: {}", e))
}
