use super::CalendarApp;
use crate::services::calendar::SubmitOutcome;

/// Form submission, export and clear actions.
impl CalendarApp {
    pub(super) fn submit_event(&mut self) {
        match self.controller.submit_draft() {
            Ok(SubmitOutcome::Added) => {
                self.toast_manager.success("Event added");
            }
            Ok(SubmitOutcome::Incomplete) => {}
            Ok(SubmitOutcome::Invalid(reason)) => {
                log::info!("Rejected event form: {}", reason);
                self.toast_manager.warning(reason);
            }
            Err(e) => {
                log::error!("Failed to save event: {}", e);
                self.toast_manager.error("Failed to save event");
            }
        }
    }

    /// Export all events to a JSON file chosen by the user
    pub(super) fn export_events(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Export Events")
            .set_file_name(&self.settings.export_file_name)
            .add_filter("JSON", &["json"])
            .save_file()
        {
            match self.controller.export_to(&path) {
                Ok(()) => {
                    let count = self.controller.events().len();
                    self.toast_manager
                        .success(format!("Exported {} events", count));
                }
                Err(e) => {
                    log::error!("Failed to export events: {:#}", e);
                    self.toast_manager.error("Failed to export events");
                }
            }
        }
    }

    pub(super) fn clear_events(&mut self) {
        match self.controller.clear_all() {
            Ok(()) => self.toast_manager.info("All events cleared"),
            Err(e) => {
                log::error!("Failed to clear events: {}", e);
                self.toast_manager.error("Failed to clear events");
            }
        }
    }
}
