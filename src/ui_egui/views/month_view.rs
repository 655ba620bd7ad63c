use chrono::NaiveDate;
use egui::{Margin, Stroke, Vec2};

use super::palette::{CalendarCellPalette, DayStripPalette, EventChipPalette};
use crate::models::event::Event;
use crate::services::calendar::MonthGrid;
use crate::services::event::events_for_date;
use crate::ui_egui::theme::CalendarTheme;

pub(crate) const CELL_HEIGHT: f32 = 96.0;

/// Action returned from month view
pub enum MonthViewAction {
    /// No action
    None,
    /// A day cell was clicked; prefill the form with this date
    PickDate(NaiveDate),
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        grid: &MonthGrid,
        events: &[Event],
        weekday_names: [&str; 7],
        theme: &CalendarTheme,
    ) -> MonthViewAction {
        let mut action = MonthViewAction::None;

        let spacing = 2.0;
        let total_spacing = spacing * 6.0; // 6 gaps between 7 columns
        let col_width = ((ui.available_width() - total_spacing) / 7.0).max(40.0);

        let strip_palette = DayStripPalette::from_theme(theme);
        egui::Grid::new("month_header_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for day in weekday_names {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 30.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(strip_palette.header_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, strip_palette.strip_border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |cell_ui| {
                                    cell_ui.centered_and_justified(|label_ui| {
                                        label_ui.label(
                                            egui::RichText::new(day)
                                                .size(14.0)
                                                .color(strip_palette.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });

        ui.add_space(5.0);

        let cell_palette = CalendarCellPalette::from_theme(theme);
        let chip_palette = EventChipPalette::from_theme(theme);

        egui::Grid::new("month_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for week in grid.weeks() {
                    for day in week {
                        let day_events = events_for_date(events, day.date);
                        let clicked = Self::render_day_cell(
                            ui,
                            day,
                            &day_events,
                            cell_palette,
                            chip_palette,
                            col_width,
                        );
                        if clicked {
                            action = MonthViewAction::PickDate(day.date);
                        }
                    }
                    ui.end_row();
                }
            });

        action
    }
}
