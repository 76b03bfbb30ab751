//! Traits used by the views to query events

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Event, EventId};

/// Anything the month and week views can read events from
pub trait EventSource {
    /// Returns a particular event
    fn get_event_by_id(&self, id: &EventId) -> Option<&Event>;

    /// Returns the events whose [start, end] span covers the calendar day `date`.
    ///
    /// This compares calendar days only: an event from Jan 1st 23:00 to Jan 3rd 01:00 covers Jan 1st, 2nd and 3rd
    fn events_for_date(&self, date: NaiveDate) -> Vec<&Event>;

    /// Returns the events overlapping the `[start, end]` range.
    ///
    /// Unlike [`EventSource::events_for_date`], this compares exact timestamps, both bounds included
    fn events_for_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Event>;
}
