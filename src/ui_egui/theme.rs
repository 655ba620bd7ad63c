//! Theme module for the egui month view
//!
//! Defines the CalendarTheme structure with light and dark palettes.

use egui::Color32;

/// A calendar theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background behind padding days from adjacent months
    pub calendar_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Weekday header strip
    pub header_background: Color32,
    pub header_text: Color32,

    /// Event chip fill and text
    pub event_background: Color32,
    pub event_text: Color32,

    /// Chip fill and outline for events sharing a slot
    pub conflict_background: Color32,
    pub conflict_border: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (faded day numbers)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(236, 236, 240),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(225, 230, 240),
            header_text: Color32::from_rgb(50, 60, 80),
            event_background: Color32::from_rgb(210, 228, 255),
            event_text: Color32::from_rgb(25, 45, 90),
            conflict_background: Color32::from_rgb(255, 220, 220),
            conflict_border: Color32::from_rgb(200, 50, 50),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(150, 150, 150),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(34, 34, 36),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(44, 44, 44),
            day_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(52, 56, 66),
            header_text: Color32::from_rgb(220, 225, 235),
            event_background: Color32::from_rgb(45, 70, 115),
            event_text: Color32::from_rgb(225, 235, 255),
            conflict_background: Color32::from_rgb(95, 35, 35),
            conflict_border: Color32::from_rgb(255, 110, 110),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(120, 120, 120),
        }
    }

    pub fn for_settings(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
