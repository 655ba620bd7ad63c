use super::toast::ToastManager;
use super::CalendarApp;
use crate::models::settings::Settings;
use crate::services::calendar::{CalendarController, LoadOutcome};
use crate::services::database::Database;
use crate::services::fallback::{source_from_location, InitialLoad};
use crate::ui_egui::event_form::{render_event_form, EventFormState};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{MonthView, MonthViewAction};
use crate::utils::date::ChronoDates;
use chrono::Local;
use std::time::Duration;

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, database: Database) -> Self {
        let today = Local::now().date_naive();
        let week = ChronoDates::from_first_day_of_week(settings.first_day_of_week);

        let mut controller = CalendarController::new(database, week, today);
        let initial_load = match controller.load_persisted() {
            LoadOutcome::Persisted(_) => None,
            LoadOutcome::NeedsFallback => start_fallback_load(&settings.fallback_source),
        };

        let active_theme = CalendarTheme::for_settings(settings.is_dark_theme());
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            controller,
            settings,
            week,
            active_theme,
            form_state: EventFormState::new(today),
            initial_load,
            toast_manager: ToastManager::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_initial_load(ctx);

        self.handle_keyboard_shortcuts(ctx);

        self.render_header(ctx);
        self.render_status_bar(ctx);
        self.render_main_panel(ctx);

        // Render toast notifications (last, so they appear on top)
        let is_dark = self.active_theme.is_dark;
        self.toast_manager.render(ctx, is_dark);
    }

    fn poll_initial_load(&mut self, ctx: &egui::Context) {
        let Some(load) = self.initial_load.as_mut() else {
            return;
        };

        match load.poll() {
            Some(result) => {
                self.initial_load = None;
                if self.controller.apply_fallback(result) {
                    let count = self.controller.events().len();
                    if count > 0 {
                        self.toast_manager
                            .info(format!("Loaded {} sample events", count));
                    }
                }
            }
            None => ctx.request_repaint_after(Duration::from_millis(200)),
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("calendar_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("←").on_hover_text("Previous month").clicked() {
                    self.navigate_previous();
                }
                ui.heading(self.controller.month_title());
                if ui.button("→").on_hover_text("Next month").clicked() {
                    self.navigate_next();
                }
            });

            ui.add_space(4.0);
            let submitted = render_event_form(ui, self.controller.draft_mut(), &mut self.form_state);
            if submitted {
                self.submit_event();
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Export Events").clicked() {
                    self.export_events();
                }
                if ui.button("Clear All").clicked() {
                    self.clear_events();
                }
            });
            ui.add_space(6.0);
        });
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let count = self.controller.events().len();
                ui.label(format!(
                    "{} event{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ));

                let conflicts = self.controller.conflict_count();
                if conflicts > 0 {
                    ui.separator();
                    ui.colored_label(
                        self.active_theme.conflict_border,
                        format!(
                            "⚠ {} conflicting time slot{}",
                            conflicts,
                            if conflicts == 1 { "" } else { "s" }
                        ),
                    );
                }

                if self.initial_load.is_some() {
                    ui.separator();
                    ui.spinner();
                    ui.label(format!("Loading events from {}", self.settings.fallback_source));
                }
            });
        });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let today = Local::now().date_naive();
        let grid = self.controller.month_grid(today);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let action = MonthView::show(
                    ui,
                    &grid,
                    self.controller.events(),
                    self.week.weekday_names(),
                    &self.active_theme,
                );

                if let MonthViewAction::PickDate(date) = action {
                    self.controller.draft_mut().set_date(date);
                }
            });
        });
    }
}

fn start_fallback_load(location: &str) -> Option<InitialLoad> {
    match source_from_location(location) {
        Ok(source) => Some(InitialLoad::spawn(source)),
        Err(e) => {
            log::warn!("No static events loaded: {:#}", e);
            None
        }
    }
}
