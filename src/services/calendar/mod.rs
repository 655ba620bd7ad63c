// Calendar service module
// Month grid generation and the controller driving the month view

mod controller;
mod grid;

pub use controller::{CalendarController, LoadOutcome, SubmitOutcome};
pub use grid::{GridDay, MonthGrid};
