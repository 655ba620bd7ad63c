// Property-based tests for month grid generation
// Checks the grid invariants over random months and week starts

use chrono::{Datelike, NaiveDate};
use month_planner::services::calendar::MonthGrid;
use month_planner::utils::date::{ChronoDates, DateUtils, TimeUnit};
use proptest::prelude::*;

proptest! {
    /// Property: the grid covers whole weeks aligned to the configured week start
    #[test]
    fn prop_grid_is_whole_aligned_weeks(
        year in 1900..2200i32,
        month in 1..=12u32,
        day in 1..=28u32,
        first_day_of_week in 0..=6u8,
    ) {
        let dates = ChronoDates::from_first_day_of_week(first_day_of_week);
        let cursor = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let grid = MonthGrid::build(cursor, cursor, &dates);

        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!(grid.len() == 28 || grid.len() == 35 || grid.len() == 42);

        let first = grid.first().unwrap();
        let last = grid.last().unwrap();
        prop_assert_eq!(first.weekday(), dates.week_start());
        prop_assert_eq!(last.weekday(), dates.week_start().pred());
    }

    /// Property: every day of the month appears exactly once, in order
    #[test]
    fn prop_grid_contains_whole_month(
        year in 1900..2200i32,
        month in 1..=12u32,
        first_day_of_week in 0..=6u8,
    ) {
        let dates = ChronoDates::from_first_day_of_week(first_day_of_week);
        let cursor = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = MonthGrid::build(cursor, cursor, &dates);

        let in_month: Vec<NaiveDate> = grid
            .days()
            .iter()
            .filter(|d| d.in_month)
            .map(|d| d.date)
            .collect();
        let last_of_month = dates.end_of(cursor, TimeUnit::Month);

        prop_assert_eq!(in_month.first().copied(), Some(cursor));
        prop_assert_eq!(in_month.last().copied(), Some(last_of_month));
        prop_assert_eq!(in_month.len() as u32, last_of_month.day());

        // Consecutive cells are consecutive days
        for pair in grid.days().windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    /// Property: moving forward then back by a month returns to the same cursor
    #[test]
    fn prop_month_navigation_is_reversible(
        year in 1900..2200i32,
        month in 1..=12u32,
        steps in 1..48i32,
    ) {
        let dates = ChronoDates::default();
        let cursor = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let moved = dates.add(cursor, steps, TimeUnit::Month);
        prop_assert_eq!(dates.subtract(moved, steps, TimeUnit::Month), cursor);
    }
}
