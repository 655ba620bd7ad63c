mod actions;
mod lifecycle;
mod navigation;
mod shortcuts;
mod toast;

use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::services::calendar::CalendarController;
use crate::services::database::Database;
use crate::services::fallback::InitialLoad;
use crate::ui_egui::event_form::EventFormState;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::ChronoDates;

pub struct CalendarApp {
    /// Month cursor, events and form draft, persisted through SQLite
    controller: CalendarController<Database>,
    settings: Settings,
    week: ChronoDates,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    form_state: EventFormState,
    /// Pending one-shot fallback load, if startup found nothing persisted
    initial_load: Option<InitialLoad>,
    toast_manager: ToastManager,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
