//! The context object a calendar UI talks to
//!
//! A [`CalendarSession`] owns the events and the navigation state of a single user for the time of a session.
//! It is explicitly built and handed to whatever needs it: there is no global state.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Event, EventId, EventUpdate, NewEvent};
use crate::grid::{self, DayColumn, GridCell};
use crate::navigation::{CalendarNavigation, ViewMode};
use crate::store::EventStore;
use crate::traits::EventSource;
use crate::utils;
use crate::validation::{EventDraft, Validation};


/// Events and navigation state of a calendar
#[derive(Clone, Debug, Default)]
pub struct CalendarSession {
    events: EventStore,
    navigation: CalendarNavigation,
}

impl CalendarSession {
    /// A new session with no events, showing the current month
    pub fn new() -> Self {
        Self::with_today(utils::today())
    }

    /// A new session with no events, showing the month of `today`
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            events: EventStore::new(),
            navigation: CalendarNavigation::new(today),
        }
    }

    pub fn events(&self) -> &EventStore                 { &self.events     }
    pub fn navigation(&self) -> &CalendarNavigation     { &self.navigation }
    pub fn navigation_mut(&mut self) -> &mut CalendarNavigation { &mut self.navigation }


    // Commands

    /// Add an event. The caller is expected to have validated it
    pub fn add_event(&mut self, new: NewEvent) -> Event {
        self.events.add(new)
    }

    /// Update an event. This is a no-op in case it does not exist
    pub fn update_event(&mut self, id: &EventId, update: &EventUpdate) {
        self.events.update(id, update)
    }

    /// Delete an event. This is a no-op in case it does not exist
    pub fn delete_event(&mut self, id: &EventId) {
        self.events.delete(id)
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.navigation.set_current_date(date)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.navigation.set_view_mode(mode)
    }

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.navigation.set_selected_date(date)
    }


    // Queries

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.events_for_date(date)
    }

    pub fn events_for_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Event> {
        self.events.events_for_range(start, end)
    }

    pub fn get_event_by_id(&self, id: &EventId) -> Option<&Event> {
        self.events.get_by_id(id)
    }

    pub fn month_grid(&self, date: NaiveDate) -> Vec<NaiveDate> {
        grid::month_grid(date)
    }

    pub fn week_grid(&self, date: NaiveDate) -> Vec<NaiveDate> {
        grid::week_grid(date)
    }

    /// The cells of the currently displayed month
    pub fn month_cells(&self) -> Vec<GridCell<'_>> {
        grid::month_cells(
            &self.events,
            self.navigation.current_date(),
            self.navigation.selected_date(),
            utils::today(),
        )
    }

    /// The columns of the currently displayed week
    pub fn week_columns(&self) -> Vec<DayColumn<'_>> {
        grid::week_columns(&self.events, self.navigation.current_date())
    }


    // Form lifecycle

    /// The user picked a day: select it, and return an empty form for a new event on that day
    pub fn open_day(&mut self, date: NaiveDate) -> EventDraft {
        self.navigation.set_selected_date(Some(date));
        self.events.set_active_event(None);
        EventDraft::for_date(date)
    }

    /// The user picked an event: make it the active one, and return a form filled with it
    pub fn open_event(&mut self, id: &EventId) -> Option<EventDraft> {
        let draft = self.events.get_by_id(id).map(EventDraft::from_event)?;
        self.events.set_active_event(Some(id.clone()));
        Some(draft)
    }

    /// The form has been dismissed
    pub fn close_form(&mut self) {
        self.events.set_active_event(None);
    }

    /// Validate a form, then add it as a new event (or update the `editing` event, in case it still exists).
    ///
    /// Nothing is changed when the form is invalid.
    pub fn save_draft(&mut self, draft: &EventDraft, editing: Option<&EventId>) -> Result<EventId, Validation> {
        let validation = draft.validate();
        if validation.is_valid() == false {
            log::info!("Not saving event {:?}: {}", draft.title, validation);
            return Err(validation);
        }

        let id = match editing {
            Some(id) if self.events.get_by_id(id).is_some() => {
                self.events.update(id, &draft.to_update()?);
                id.clone()
            },
            _ => self.events.add(draft.to_new_event()?).id().clone(),
        };
        self.events.set_active_event(None);
        Ok(id)
    }
}

impl EventSource for CalendarSession {
    fn get_event_by_id(&self, id: &EventId) -> Option<&Event> {
        self.events.get_by_id(id)
    }

    fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.events_for_date(date)
    }

    fn events_for_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Event> {
        self.events.events_for_range(start, end)
    }
}
