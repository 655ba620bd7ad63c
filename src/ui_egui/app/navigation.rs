use super::CalendarApp;
use chrono::Local;

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.controller.previous_month();
    }

    pub(super) fn navigate_next(&mut self) {
        self.controller.next_month();
    }

    pub(super) fn jump_to_today(&mut self) {
        self.controller.go_to_month(Local::now().date_naive());
    }
}
