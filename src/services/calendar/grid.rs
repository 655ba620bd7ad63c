use crate::utils::date::{DateUtils, TimeUnit};
use chrono::{Datelike, NaiveDate};

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// False for padding days from the adjacent months
    pub in_month: bool,
    pub is_today: bool,
}

/// Complete weeks covering a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    days: Vec<GridDay>,
}

impl MonthGrid {
    /// Build the grid for the month containing `cursor`.
    ///
    /// Runs from the start of the week holding the first of the month to the
    /// end of the week holding its last day, inclusive.
    pub fn build(cursor: NaiveDate, today: NaiveDate, dates: &impl DateUtils) -> Self {
        let month = dates.start_of(cursor, TimeUnit::Month);
        let start = dates.start_of(month, TimeUnit::Week);
        let end = dates.end_of(dates.end_of(month, TimeUnit::Month), TimeUnit::Week);

        let days = start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|date| GridDay {
                date,
                in_month: date.year() == month.year() && date.month() == month.month(),
                is_today: dates.is_same_day(date, today),
            })
            .collect();

        Self { days }
    }

    pub fn days(&self) -> &[GridDay] {
        &self.days
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[GridDay]> {
        self.days.chunks(7)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::ChronoDates;
    use chrono::Weekday;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_march_2024_sunday_start() {
        let grid = MonthGrid::build(ymd(2024, 3, 15), ymd(2024, 3, 15), &ChronoDates::default());
        assert_eq!(grid.first(), Some(ymd(2024, 2, 25)));
        assert_eq!(grid.last(), Some(ymd(2024, 4, 6)));
        assert_eq!(grid.len(), 42);
    }

    #[test]
    fn test_march_2024_monday_start() {
        let grid = MonthGrid::build(ymd(2024, 3, 1), ymd(2000, 1, 1), &ChronoDates::new(Weekday::Mon));
        assert_eq!(grid.first(), Some(ymd(2024, 2, 26)));
        // March 31st is a Sunday, so the last week closes inside the month
        assert_eq!(grid.last(), Some(ymd(2024, 3, 31)));
        assert_eq!(grid.len(), 35);
    }

    #[test_case(2015, 2, 28 ; "february starting on sunday")]
    #[test_case(2024, 2, 35 ; "leap february")]
    #[test_case(2024, 6, 42 ; "june 2024")]
    #[test_case(2024, 9, 35 ; "september 2024")]
    fn test_grid_lengths(year: i32, month: u32, expected: usize) {
        let grid = MonthGrid::build(ymd(year, month, 1), ymd(year, month, 1), &ChronoDates::default());
        assert_eq!(grid.len(), expected);
        assert_eq!(grid.weeks().count(), expected / 7);
    }

    #[test]
    fn test_in_month_and_today_flags() {
        let grid = MonthGrid::build(ymd(2024, 3, 1), ymd(2024, 3, 10), &ChronoDates::default());

        let padding: Vec<_> = grid.days().iter().filter(|d| !d.in_month).collect();
        assert_eq!(padding.len(), 42 - 31);

        let today: Vec<_> = grid.days().iter().filter(|d| d.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, ymd(2024, 3, 10));
    }

    #[test]
    fn test_today_outside_grid_not_flagged() {
        let grid = MonthGrid::build(ymd(2024, 3, 1), ymd(2025, 1, 1), &ChronoDates::default());
        assert!(grid.days().iter().all(|d| !d.is_today));
        assert!(!grid.is_empty());
    }
}
