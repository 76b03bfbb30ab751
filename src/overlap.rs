//! Stacking of overlapping events, for the week time grid

use crate::Event;

/// Whether two events share some time.
///
/// Bounds are exclusive: an event ending at 10:00 does not overlap an event starting at 10:00
pub fn events_overlap(left: &Event, right: &Event) -> bool {
    left.start_date() < right.end_date() && right.start_date() < left.end_date()
}

/// Sort events by start time. Events starting at the same time keep their relative order
pub fn sort_by_start_time<'a, I>(events: I) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sorted: Vec<&Event> = events.into_iter().collect();
    sorted.sort_by_key(|event| event.start_date());
    sorted
}

/// Split events into stacking groups.
///
/// Events are considered by start time. Each one joins the first existing group that contains
/// an event it overlaps with, or starts a new group.
///
/// This is a greedy approximation of interval graph coloring: two events of the same group are
/// chained together by overlapping events, but they do not necessarily overlap each other.
pub fn group_overlapping_events<'a, I>(events: I) -> Vec<Vec<&'a Event>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut groups: Vec<Vec<&Event>> = Vec::new();

    for event in sort_by_start_time(events) {
        let target = groups.iter_mut()
            .find(|group| group.iter().any(|member| events_overlap(member, event)));

        match target {
            Some(group) => group.push(event),
            None => groups.push(vec![event]),
        }
    }

    groups
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use crate::event::{EventId, NewEvent};

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn event(name: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::from_new(EventId::from(name), NewEvent::new(name, start, end))
    }

    fn titles(groups: &[Vec<&Event>]) -> Vec<Vec<String>> {
        groups.iter()
            .map(|group| group.iter().map(|e| e.title().to_string()).collect())
            .collect()
    }

    #[test]
    fn overlap_is_strict() {
        let a = event("a", at(9, 0), at(10, 0));
        let b = event("b", at(10, 0), at(11, 0));
        let c = event("c", at(9, 59), at(10, 30));
        assert!(events_overlap(&a, &b) == false);
        assert!(events_overlap(&a, &c));
        assert!(events_overlap(&c, &a));
        assert!(events_overlap(&a, &a));
    }

    #[test]
    fn two_groups() {
        let events = vec![
            event("late", at(12, 0), at(13, 0)),
            event("first", at(9, 0), at(10, 0)),
            event("second", at(9, 30), at(11, 0)),
        ];
        let groups = group_overlapping_events(&events);
        assert_eq!(titles(&groups), vec![
            vec!["first".to_string(), "second".to_string()],
            vec!["late".to_string()],
        ]);
    }

    #[test]
    fn empty_input() {
        let events: Vec<Event> = Vec::new();
        assert!(group_overlapping_events(&events).is_empty());
    }

    #[test]
    fn chained_events_share_a_group() {
        // a and c do not overlap, but b links them
        let events = vec![
            event("a", at(9, 0), at(10, 0)),
            event("b", at(9, 30), at(11, 0)),
            event("c", at(10, 30), at(12, 0)),
        ];
        let groups = group_overlapping_events(&events);
        assert_eq!(groups.len(), 1);
        assert!(events_overlap(groups[0][0], groups[0][2]) == false);
    }

    #[test]
    fn touching_events_are_separate_groups() {
        let events = vec![
            event("a", at(9, 0), at(10, 0)),
            event("b", at(10, 0), at(11, 0)),
        ];
        assert_eq!(group_overlapping_events(&events).len(), 2);
    }

    #[test]
    fn ties_keep_input_order() {
        let events = vec![
            event("x", at(9, 0), at(9, 30)),
            event("y", at(9, 0), at(9, 45)),
            event("z", at(9, 0), at(9, 15)),
        ];
        let first = group_overlapping_events(&events);
        let second = group_overlapping_events(&events);
        assert_eq!(titles(&first), vec![vec!["x".to_string(), "y".to_string(), "z".to_string()]]);
        assert_eq!(first, second);
    }
}
