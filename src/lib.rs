//! This crate provides the in-memory model behind a calendar UI.
//!
//! Events live in an [`EventStore`](store::EventStore), which supports creation, partial updates, deletion,
//! and the two queries the views need: events covering a calendar day, and events overlapping a time range.
//!
//! The [`grid`] module generates the days of the month view (always 42 of them) and of the week view,
//! and pairs them with events. Events that share some time in the week view are stacked into lanes by the [`overlap`] module.
//!
//! Nothing in the store is validated: a UI is expected to run [`validation::validate`] (or [`EventDraft::validate`]) before saving an event.
//! A [`CalendarSession`] bundles all of this, together with the navigation state, into a single context object.

pub mod traits;

mod event;
pub use event::{Event, EventColor, EventId, EventUpdate, NewEvent};
pub mod store;
pub use store::EventStore;
pub mod grid;
pub mod overlap;
pub mod validation;
pub use validation::{EventDraft, Validation, ValidationError};
pub mod navigation;
pub use navigation::{CalendarNavigation, FocusMove, ViewMode};
pub mod session;
pub use session::CalendarSession;

pub mod format;
pub mod config;
pub mod utils;
