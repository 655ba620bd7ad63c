// Date utility functions
// Month/week arithmetic behind a small trait so the grid does not depend on chrono directly

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Granularity used by the start/end/add helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
}

/// Calendar arithmetic needed by the month view.
///
/// Operations saturate at the limits of the date type instead of failing,
/// so navigation can continue indefinitely in either direction.
pub trait DateUtils {
    /// First day of the unit containing `date`
    fn start_of(&self, date: NaiveDate, unit: TimeUnit) -> NaiveDate;

    /// Last day of the unit containing `date`
    fn end_of(&self, date: NaiveDate, unit: TimeUnit) -> NaiveDate;

    /// Shift `date` by `amount` units (negative moves backwards)
    fn add(&self, date: NaiveDate, amount: i32, unit: TimeUnit) -> NaiveDate;

    fn subtract(&self, date: NaiveDate, amount: i32, unit: TimeUnit) -> NaiveDate {
        self.add(date, amount.saturating_neg(), unit)
    }

    fn is_same_day(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a == b
    }

    /// Format using strftime-style specifiers
    fn format(&self, date: NaiveDate, pattern: &str) -> String;
}

/// chrono-backed implementation with a configurable first day of week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronoDates {
    week_start: Weekday,
}

impl ChronoDates {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    /// Build from the settings encoding (0 = Sunday .. 6 = Saturday)
    pub fn from_first_day_of_week(first_day_of_week: u8) -> Self {
        Self::new(weekday_from_index(first_day_of_week))
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Weekday names starting at the configured first day of the week
    pub fn weekday_names(&self) -> [&'static str; 7] {
        const ALL_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        let start = self.week_start.num_days_from_sunday() as usize;
        std::array::from_fn(|i| ALL_DAYS[(start + i) % 7])
    }

    fn days_into_week(&self, date: NaiveDate) -> u64 {
        let offset = date.weekday().num_days_from_sunday() + 7
            - self.week_start.num_days_from_sunday();
        u64::from(offset % 7)
    }
}

impl Default for ChronoDates {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl DateUtils for ChronoDates {
    fn start_of(&self, date: NaiveDate, unit: TimeUnit) -> NaiveDate {
        match unit {
            TimeUnit::Day => date,
            TimeUnit::Week => date
                .checked_sub_days(Days::new(self.days_into_week(date)))
                .unwrap_or(NaiveDate::MIN),
            TimeUnit::Month => date.with_day(1).unwrap_or(date),
        }
    }

    fn end_of(&self, date: NaiveDate, unit: TimeUnit) -> NaiveDate {
        match unit {
            TimeUnit::Day => date,
            TimeUnit::Week => self
                .start_of(date, TimeUnit::Week)
                .checked_add_days(Days::new(6))
                .unwrap_or(NaiveDate::MAX),
            TimeUnit::Month => self
                .start_of(date, TimeUnit::Month)
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(NaiveDate::MAX),
        }
    }

    fn add(&self, date: NaiveDate, amount: i32, unit: TimeUnit) -> NaiveDate {
        let magnitude = amount.unsigned_abs();
        let shifted = match unit {
            TimeUnit::Day | TimeUnit::Week => {
                let days = if unit == TimeUnit::Week {
                    u64::from(magnitude) * 7
                } else {
                    u64::from(magnitude)
                };
                if amount >= 0 {
                    date.checked_add_days(Days::new(days))
                } else {
                    date.checked_sub_days(Days::new(days))
                }
            }
            // chrono clamps the day to the end of a shorter target month
            TimeUnit::Month => {
                if amount >= 0 {
                    date.checked_add_months(Months::new(magnitude))
                } else {
                    date.checked_sub_months(Months::new(magnitude))
                }
            }
        };

        shifted.unwrap_or(if amount >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
    }

    fn format(&self, date: NaiveDate, pattern: &str) -> String {
        date.format(pattern).to_string()
    }
}

fn weekday_from_index(index: u8) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_of_week_sunday() {
        let dates = ChronoDates::default();
        // 2024-03-01 is a Friday
        assert_eq!(dates.start_of(ymd(2024, 3, 1), TimeUnit::Week), ymd(2024, 2, 25));
        assert_eq!(dates.end_of(ymd(2024, 3, 1), TimeUnit::Week), ymd(2024, 3, 2));
    }

    #[test]
    fn test_start_of_week_monday() {
        let dates = ChronoDates::new(Weekday::Mon);
        assert_eq!(dates.start_of(ymd(2024, 3, 1), TimeUnit::Week), ymd(2024, 2, 26));
        assert_eq!(dates.end_of(ymd(2024, 3, 1), TimeUnit::Week), ymd(2024, 3, 3));
    }

    #[test]
    fn test_start_of_week_on_week_start_is_identity() {
        let dates = ChronoDates::default();
        assert_eq!(dates.start_of(ymd(2024, 3, 10), TimeUnit::Week), ymd(2024, 3, 10));
    }

    #[test_case(2024, 2, 29 ; "leap february")]
    #[test_case(2023, 2, 28 ; "common february")]
    #[test_case(2024, 4, 30 ; "thirty day month")]
    #[test_case(2024, 12, 31 ; "december")]
    fn test_end_of_month(year: i32, month: u32, last_day: u32) {
        let dates = ChronoDates::default();
        assert_eq!(dates.end_of(ymd(year, month, 15), TimeUnit::Month), ymd(year, month, last_day));
        assert_eq!(dates.start_of(ymd(year, month, 15), TimeUnit::Month), ymd(year, month, 1));
    }

    #[test]
    fn test_add_months_crosses_year() {
        let dates = ChronoDates::default();
        assert_eq!(dates.add(ymd(2024, 12, 1), 1, TimeUnit::Month), ymd(2025, 1, 1));
        assert_eq!(dates.subtract(ymd(2024, 1, 1), 1, TimeUnit::Month), ymd(2023, 12, 1));
    }

    #[test]
    fn test_add_month_clamps_day() {
        let dates = ChronoDates::default();
        assert_eq!(dates.add(ymd(2024, 1, 31), 1, TimeUnit::Month), ymd(2024, 2, 29));
    }

    #[test]
    fn test_add_days_and_weeks() {
        let dates = ChronoDates::default();
        assert_eq!(dates.add(ymd(2024, 2, 28), 2, TimeUnit::Day), ymd(2024, 3, 1));
        assert_eq!(dates.add(ymd(2024, 3, 1), -1, TimeUnit::Week), ymd(2024, 2, 23));
    }

    #[test]
    fn test_add_saturates_at_limits() {
        let dates = ChronoDates::default();
        assert_eq!(dates.add(NaiveDate::MAX, 1, TimeUnit::Month), NaiveDate::MAX);
        assert_eq!(dates.subtract(NaiveDate::MIN, 1, TimeUnit::Day), NaiveDate::MIN);
    }

    #[test]
    fn test_format_month_title() {
        let dates = ChronoDates::default();
        assert_eq!(dates.format(ymd(2024, 3, 1), "%B %Y"), "March 2024");
    }

    #[test]
    fn test_weekday_names_rotate() {
        assert_eq!(ChronoDates::default().weekday_names()[0], "Sun");
        let monday = ChronoDates::from_first_day_of_week(1);
        assert_eq!(monday.weekday_names(), ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }
}
