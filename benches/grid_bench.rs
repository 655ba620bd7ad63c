// Benchmark for month grid generation and per-day conflict checks
// Measures the work done on every frame of the month view

use chrono::{Days, NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use month_planner::models::event::Event;
use month_planner::services::calendar::MonthGrid;
use month_planner::services::event::{events_for_date, has_conflict};
use month_planner::utils::date::ChronoDates;

fn sample_events(count: usize) -> Vec<Event> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    (0..count)
        .map(|i| {
            let date = start.checked_add_days(Days::new((i % 31) as u64)).unwrap();
            let time = NaiveTime::from_hms_opt((8 + i % 10) as u32, 0, 0).unwrap();
            Event::new(format!("Event {}", i), date, time).unwrap()
        })
        .collect()
}

fn bench_grid_build(c: &mut Criterion) {
    let dates = ChronoDates::default();
    let cursor = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    c.bench_function("month_grid_build", |b| {
        b.iter(|| MonthGrid::build(black_box(cursor), cursor, &dates))
    });
}

fn bench_render_pass(c: &mut Criterion) {
    let dates = ChronoDates::default();
    let cursor = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let grid = MonthGrid::build(cursor, cursor, &dates);

    let mut group = c.benchmark_group("conflicts_per_render");
    for count in [10usize, 100, 1000] {
        let events = sample_events(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| {
                let mut flagged = 0usize;
                for day in grid.days() {
                    let day_events = events_for_date(events, day.date);
                    flagged += day_events
                        .iter()
                        .filter(|e| has_conflict(e, &day_events))
                        .count();
                }
                black_box(flagged)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_build, bench_render_pass);
criterion_main!(benches);
