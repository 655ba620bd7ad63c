mod app;
mod event_form;
pub mod theme;
mod views;

pub use app::CalendarApp;
