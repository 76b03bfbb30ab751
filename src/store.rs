//! The in-memory collection of the events of a session

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Event, EventId, EventUpdate, NewEvent};
use crate::traits::EventSource;


/// The authoritative set of events.
///
/// Events are kept both in insertion order (for iteration) and by id (for point access).
/// These two views can only be changed together, through the methods of this struct.
///
/// The store does not validate anything: use [`validate`](crate::validation::validate) before adding or updating events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventStore {
    order: Vec<EventId>,
    events: HashMap<EventId, Event>,
    active_event: Option<EventId>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over the events, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.order.iter().filter_map(move |id| self.events.get(id))
    }

    /// Add an event, and assign it a brand new id
    pub fn add(&mut self, new: NewEvent) -> Event {
        let mut id = EventId::random();
        while self.events.contains_key(&id) {
            id = EventId::random();
        }

        let event = Event::from_new(id.clone(), new);
        log::debug!("Adding event {} ({})", event.title(), id);
        self.order.push(id.clone());
        self.events.insert(id, event.clone());
        event
    }

    /// Merge `update` into the event `id`.
    ///
    /// This is a no-op if there is no such event. Use [`EventStore::get_by_id`] to tell both cases apart.
    pub fn update(&mut self, id: &EventId, update: &EventUpdate) {
        match self.events.get_mut(id) {
            None => {
                log::debug!("No event {} to update, ignoring", id);
            },
            Some(event) => {
                update.apply_to(event);
                log::debug!("Updated event {} ({})", event.title(), id);
            },
        }
    }

    /// Remove the event `id`. This is a no-op if there is no such event.
    ///
    /// In case it was the active event, there is no active event anymore.
    pub fn delete(&mut self, id: &EventId) {
        if self.events.remove(id).is_none() {
            log::debug!("No event {} to delete, ignoring", id);
            return;
        }
        self.order.retain(|i| i != id);
        if self.active_event.as_ref() == Some(id) {
            self.active_event = None;
        }
        log::debug!("Deleted event {}", id);
    }

    /// Returns a particular event
    pub fn get_by_id(&self, id: &EventId) -> Option<&Event> {
        self.events.get(id)
    }

    /// Returns the events that cover the calendar day `date`, in insertion order
    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.iter()
            .filter(|event| event.start_date().date() <= date && date <= event.end_date().date())
            .collect()
    }

    /// Returns the events that overlap `[start, end]` (exact timestamps, bounds included), in insertion order
    pub fn events_for_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Event> {
        self.iter()
            .filter(|event| event.start_date() <= end && event.end_date() >= start)
            .collect()
    }

    /// The event that is currently opened/selected by the user, if any
    pub fn active_event(&self) -> Option<&EventId> {
        self.active_event.as_ref()
    }

    pub fn set_active_event(&mut self, id: Option<EventId>) {
        self.active_event = id;
    }
}

impl EventSource for EventStore {
    fn get_event_by_id(&self, id: &EventId) -> Option<&Event> {
        self.get_by_id(id)
    }

    fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        EventStore::events_for_date(self, date)
    }

    fn events_for_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Event> {
        EventStore::events_for_range(self, start, end)
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventColor;

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    /// Checks that both views of the store agree
    fn assert_consistent(store: &EventStore) {
        assert_eq!(store.order.len(), store.events.len());
        for id in &store.order {
            assert!(store.events.contains_key(id));
        }
    }

    #[test]
    fn add_then_get() {
        let mut store = EventStore::new();
        let new = NewEvent::new("Standup", at(5, 9, 0), at(5, 9, 30))
            .with_description("daily")
            .with_color(EventColor::Red);

        let added = store.add(new.clone());
        let second = store.add(new.clone());
        assert_ne!(added.id(), second.id());

        let retrieved = store.get_by_id(added.id()).unwrap();
        assert_eq!(retrieved, &added);
        assert_eq!(retrieved.fields(), new);
        assert_eq!(store.len(), 2);
        assert_consistent(&store);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut store = EventStore::new();
        let late = store.add(NewEvent::new("late", at(5, 18, 0), at(5, 19, 0)));
        let early = store.add(NewEvent::new("early", at(5, 8, 0), at(5, 9, 0)));

        let ids: Vec<&EventId> = store.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![late.id(), early.id()]);

        let ids: Vec<&EventId> = store.events_for_date(at(5, 0, 0).date()).into_iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![late.id(), early.id()]);
    }

    #[test]
    fn update_merges_fields() {
        let mut store = EventStore::new();
        let added = store.add(NewEvent::new("Standup", at(5, 9, 0), at(5, 9, 30)).with_description("daily"));

        store.update(added.id(), &EventUpdate::default().title("x"));
        let updated = store.get_by_id(added.id()).unwrap();
        assert_eq!(updated.title(), "x");
        assert_eq!(updated.id(), added.id());
        assert_eq!(updated.description(), added.description());
        assert_eq!(updated.start_date(), added.start_date());
        assert_eq!(updated.end_date(), added.end_date());
        assert_eq!(updated.color(), added.color());

        // The ordered view sees the same change
        assert_eq!(store.iter().next().unwrap().title(), "x");
        assert_consistent(&store);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut store = EventStore::new();
        store.add(NewEvent::new("Standup", at(5, 9, 0), at(5, 9, 30)));
        let before = store.clone();

        let unknown = EventId::from("event-does-not-exist");
        store.update(&unknown, &EventUpdate::default().title("x"));
        assert_eq!(store, before);
        store.delete(&unknown);
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_from_both_views() {
        let mut store = EventStore::new();
        let a = store.add(NewEvent::new("a", at(5, 9, 0), at(5, 10, 0)));
        let b = store.add(NewEvent::new("b", at(5, 9, 0), at(5, 10, 0)));

        store.set_active_event(Some(a.id().clone()));
        store.delete(b.id());
        assert_eq!(store.active_event(), Some(a.id()));
        assert!(store.get_by_id(b.id()).is_none());

        store.delete(a.id());
        assert!(store.get_by_id(a.id()).is_none());
        assert_eq!(store.active_event(), None);
        assert!(store.is_empty());
        assert_consistent(&store);
    }

    #[test]
    fn day_queries_ignore_time_of_day() {
        let mut store = EventStore::new();
        let trip = store.add(NewEvent::new("trip", at(1, 23, 0), at(3, 1, 0)));

        for day in 1..=3 {
            let found = store.events_for_date(NaiveDate::from_ymd_opt(2026, 1, day).unwrap());
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].id(), trip.id());
        }
        assert!(store.events_for_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()).is_empty());
        assert!(store.events_for_date(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()).is_empty());
    }

    #[test]
    fn range_queries_use_exact_inclusive_bounds() {
        let mut store = EventStore::new();
        store.add(NewEvent::new("morning", at(5, 8, 0), at(5, 9, 0)));

        assert_eq!(store.events_for_range(at(5, 9, 0), at(5, 10, 0)).len(), 1);
        assert_eq!(store.events_for_range(at(5, 7, 0), at(5, 8, 0)).len(), 1);
        assert!(store.events_for_range(at(5, 9, 1), at(5, 10, 0)).is_empty());

        // Same calendar day, but not overlapping in time: the day query still finds it
        assert!(store.events_for_range(at(5, 12, 0), at(5, 13, 0)).is_empty());
        assert_eq!(store.events_for_date(at(5, 12, 0).date()).len(), 1);
    }

    #[test]
    fn invalid_ranges_are_accepted() {
        let mut store = EventStore::new();
        let reversed = store.add(NewEvent::new("", at(5, 10, 0), at(5, 9, 0)));
        assert!(store.get_by_id(reversed.id()).is_some());
    }
}
