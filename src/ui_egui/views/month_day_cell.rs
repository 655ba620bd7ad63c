//! Day cell rendering for the month view.
//!
//! Draws the day number and one chip per event, outlining chips whose slot
//! is shared with another event on the same day.

use chrono::Datelike;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{MonthView, CELL_HEIGHT};
use super::palette::{CalendarCellPalette, EventChipPalette};
use crate::models::event::Event;
use crate::services::calendar::GridDay;
use crate::services::event::has_conflict;

const CHIP_HEIGHT: f32 = 16.0;
const CHIP_GAP: f32 = 2.0;
const DAY_NUMBER_HEIGHT: f32 = 20.0;

impl MonthView {
    /// Truncate text to fit within a given pixel width, using binary search
    /// and appending "…" when truncation is needed.
    pub(super) fn truncate_single_line_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &FontId,
        color: Color32,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                color,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        char_boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = char_boundaries.len().saturating_sub(1);

        while low < high {
            let mid = (low + high).div_ceil(2);
            let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);

            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid.saturating_sub(1);
            }
        }

        if low == 0 {
            ellipsis.to_string()
        } else {
            format!("{}{}", &text[..char_boundaries[low]], ellipsis)
        }
    }

    /// Render one day; returns true when the cell background was clicked
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        day: &GridDay,
        events: &[&Event],
        palette: CalendarCellPalette,
        chips: EventChipPalette,
        col_width: f32,
    ) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::click());

        let bg_color = if day.is_today {
            palette.today_bg
        } else if !day.in_month {
            palette.faded_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        let border_color = if day.is_today {
            palette.today_border
        } else {
            palette.border
        };
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));

        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let number_color = if day.in_month {
            palette.text
        } else {
            palette.faded_text
        };
        ui.painter().text(
            Pos2::new(rect.left() + 6.0, rect.top() + 4.0),
            Align2::LEFT_TOP,
            day.date.day().to_string(),
            FontId::proportional(13.0),
            number_color,
        );

        let available = CELL_HEIGHT - DAY_NUMBER_HEIGHT - 4.0;
        let max_chips = ((available + CHIP_GAP) / (CHIP_HEIGHT + CHIP_GAP)).floor() as usize;
        let overflow = events.len() > max_chips;
        let visible = if overflow {
            max_chips.saturating_sub(1)
        } else {
            events.len()
        };

        let font_id = FontId::proportional(11.0);
        let mut y = rect.top() + DAY_NUMBER_HEIGHT;

        for (index, event) in events.iter().take(visible).enumerate() {
            let conflict = has_conflict(event, events);
            let chip_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, y),
                Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
            );

            ui.painter()
                .rect_filled(chip_rect, 3.0, chips.fill(conflict, !day.in_month));
            if conflict {
                ui.painter()
                    .rect_stroke(chip_rect, 3.0, Stroke::new(1.5, chips.conflict_border));
            }

            let prefix = if conflict { "⚠ " } else { "" };
            let label = Self::truncate_single_line_to_width(
                ui,
                &format!("{}{}", prefix, event.label()),
                &font_id,
                chips.text,
                chip_rect.width() - 6.0,
            );
            ui.painter().text(
                Pos2::new(chip_rect.left() + 3.0, chip_rect.center().y),
                Align2::LEFT_CENTER,
                label,
                font_id.clone(),
                chips.text,
            );

            let tooltip = if conflict {
                "Conflict!".to_string()
            } else if event.duration.is_empty() {
                event.title.clone()
            } else {
                format!("{} ({})", event.title, event.duration)
            };
            ui.interact(
                chip_rect,
                ui.id().with(("event_chip", day.date, index)),
                Sense::hover(),
            )
            .on_hover_text(tooltip);

            y += CHIP_HEIGHT + CHIP_GAP;
        }

        if overflow {
            ui.painter().text(
                Pos2::new(rect.left() + 6.0, y),
                Align2::LEFT_TOP,
                format!("+{} more", events.len() - visible),
                font_id,
                number_color,
            );
        }

        response.clicked()
    }
}
