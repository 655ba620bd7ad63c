//! Add-event form rendered above the month grid.

use crate::models::event::EventDraft;
use chrono::NaiveDate;
use egui_extras::DatePickerButton;

/// Widget state that is not part of the draft itself
pub struct EventFormState {
    /// Backing value for the date picker popup
    picker_date: NaiveDate,
}

impl EventFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self { picker_date: today }
    }
}

/// Render the form; returns true when the user asked to submit it
pub fn render_event_form(ui: &mut egui::Ui, draft: &mut EventDraft, state: &mut EventFormState) -> bool {
    let mut submit = false;

    if let Some(date) = draft.parsed_date() {
        state.picker_date = date;
    }

    ui.horizontal_wrapped(|ui| {
        let title = ui.add(
            egui::TextEdit::singleline(&mut draft.title)
                .hint_text("Event Title")
                .desired_width(180.0),
        );

        let date = ui.add(
            egui::TextEdit::singleline(&mut draft.date)
                .hint_text("YYYY-MM-DD")
                .desired_width(90.0),
        );

        let picked = ui.add(DatePickerButton::new(&mut state.picker_date).id_source("event_form_date"));
        if picked.changed() {
            draft.set_date(state.picker_date);
        }

        let time = ui.add(
            egui::TextEdit::singleline(&mut draft.time)
                .hint_text("HH:MM")
                .desired_width(60.0),
        );

        let duration = ui.add(
            egui::TextEdit::singleline(&mut draft.duration)
                .hint_text("Duration (e.g. 1h)")
                .desired_width(130.0),
        );

        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        let field_committed = [&title, &date, &time, &duration]
            .iter()
            .any(|response| response.lost_focus());

        if ui.button("Add Event").clicked() || (enter_pressed && field_committed) {
            submit = true;
        }
    });

    submit
}
