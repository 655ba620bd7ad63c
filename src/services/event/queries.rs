use crate::models::event::Event;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;

/// Events falling on `date`, in collection order
pub fn events_for_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.date == date).collect()
}

/// True when at least one other event in `day_events` shares this event's date and time
pub fn has_conflict(event: &Event, day_events: &[&Event]) -> bool {
    day_events.iter().filter(|e| e.same_slot(event)).count() > 1
}

/// Every (date, time) slot occupied by more than one event
pub fn conflicting_slots(events: &[Event]) -> Vec<(NaiveDate, NaiveTime)> {
    let mut counts: HashMap<(NaiveDate, NaiveTime), usize> = HashMap::new();
    for event in events {
        *counts.entry((event.date, event.time)).or_default() += 1;
    }

    let mut slots: Vec<_> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(slot, _)| slot)
        .collect();
    slots.sort();
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(title: &str, date: &str, time: &str) -> Event {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "date": date,
            "time": time,
        }))
        .unwrap()
    }

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_events_for_date_filters_by_day() {
        let events = vec![
            event("A", "2024-03-10", "09:00"),
            event("B", "2024-03-11", "09:00"),
            event("C", "2024-03-10T23:59:00", "23:59"),
        ];

        let titles: Vec<&str> = events_for_date(&events, march(10))
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert!(events_for_date(&events, march(12)).is_empty());
    }

    #[test]
    fn test_same_date_and_time_both_conflict() {
        let events = vec![
            event("A", "2024-03-10", "09:00"),
            event("B", "2024-03-10", "09:00"),
        ];
        let day = events_for_date(&events, march(10));
        assert!(has_conflict(&events[0], &day));
        assert!(has_conflict(&events[1], &day));
    }

    #[test]
    fn test_different_time_clears_conflict() {
        let events = vec![
            event("A", "2024-03-10", "09:00"),
            event("B", "2024-03-10", "10:00"),
        ];
        let day = events_for_date(&events, march(10));
        assert!(!has_conflict(&events[0], &day));
        assert!(!has_conflict(&events[1], &day));
    }

    #[test]
    fn test_single_event_never_conflicts() {
        let events = vec![event("Solo", "2024-03-10", "09:00")];
        let day = events_for_date(&events, march(10));
        assert!(!has_conflict(&events[0], &day));
    }

    #[test]
    fn test_equivalent_time_spellings_conflict() {
        let events = vec![
            event("A", "2024-03-10", "09:00"),
            event("B", "2024-03-10", "09:00:00"),
        ];
        let day = events_for_date(&events, march(10));
        assert!(has_conflict(&events[0], &day));
    }

    #[test]
    fn test_conflicting_slots_sorted_and_deduplicated() {
        let events = vec![
            event("A", "2024-03-11", "09:00"),
            event("B", "2024-03-11", "09:00"),
            event("C", "2024-03-11", "09:00"),
            event("D", "2024-03-10", "08:00"),
            event("E", "2024-03-10", "08:00"),
            event("F", "2024-03-10", "12:00"),
        ];

        let slots = conflicting_slots(&events);
        assert_eq!(
            slots,
            vec![
                (march(10), NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
                (march(11), NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            ]
        );
    }
}
