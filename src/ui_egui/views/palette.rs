use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub faded_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub faded_text: Color32,
    pub hover_border: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            faded_bg: blend(theme.day_background, theme.calendar_background, 0.7),
            today_bg: theme.today_background,
            border: theme.day_border,
            today_border: theme.today_border,
            text: theme.text_primary,
            faded_text: theme.text_secondary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct DayStripPalette {
    pub strip_border: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
}

impl DayStripPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            strip_border: theme.day_border,
            header_bg: theme.header_background,
            header_text: theme.header_text,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct EventChipPalette {
    pub bg: Color32,
    pub text: Color32,
    pub conflict_bg: Color32,
    pub conflict_border: Color32,
    /// Chips on padding days are drawn muted
    pub faded_alpha: u8,
}

impl EventChipPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            bg: theme.event_background,
            text: theme.event_text,
            conflict_bg: theme.conflict_background,
            conflict_border: theme.conflict_border,
            faded_alpha: if theme.is_dark { 140 } else { 110 },
        }
    }

    pub fn fill(&self, conflict: bool, faded: bool) -> Color32 {
        let base = if conflict { self.conflict_bg } else { self.bg };
        if faded {
            with_alpha(base, self.faded_alpha)
        } else {
            base
        }
    }
}
