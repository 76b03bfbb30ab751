//! Checks on events before they are committed to the store, and the form model that feeds them

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};
use crate::event::{Event, EventColor, EventUpdate, NewEvent};


/// A reason why an event cannot be saved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EndBeforeOrEqualStart,
    InvalidStartDate,
    InvalidEndDate,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let message = match self {
            ValidationError::EmptyTitle => "Title is required",
            ValidationError::EndBeforeOrEqualStart => "End date must be after start date",
            ValidationError::InvalidStartDate => "Invalid start date",
            ValidationError::InvalidEndDate => "Invalid end date",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for ValidationError {}


/// The outcome of [`validate`]: every failed check, in the order they are performed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<ValidationError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Human-readable messages, one per error, as a form would display them
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

impl Display for Validation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.messages().join(", "))
    }
}

/// Check that an event can be saved.
///
/// A `None` date stands for a date that could not be parsed. All checks are run, even after one has failed:
/// 1. the title must not be blank
/// 2. the end must be strictly after the start (only checked when both dates are valid)
/// 3. the start must be a valid date
/// 4. the end must be a valid date
pub fn validate(title: &str, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Validation {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }

    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            errors.push(ValidationError::EndBeforeOrEqualStart);
        }
    }

    if start.is_none() {
        errors.push(ValidationError::InvalidStartDate);
    }

    if end.is_none() {
        errors.push(ValidationError::InvalidEndDate);
    }

    Validation { errors }
}



/// The raw content of an event form, before it is parsed and validated.
///
/// Dates are `yyyy-mm-dd` strings and times are `HH:MM` strings, as HTML date and time inputs produce them.
#[derive(Clone, Debug, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub color: EventColor,
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

impl EventDraft {
    /// An empty form for a new event on `date`
    pub fn for_date(date: NaiveDate) -> Self {
        let date = date.format(DATE_FORMAT).to_string();
        Self {
            title: String::new(),
            description: String::new(),
            start_date: date.clone(),
            start_time: format!("{:02}:00", DEFAULT_START_HOUR),
            end_date: date,
            end_time: format!("{:02}:00", DEFAULT_END_HOUR),
            color: EventColor::default(),
        }
    }

    /// A form pre-filled with an existing event
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title().to_string(),
            description: event.description().unwrap_or_default().to_string(),
            start_date: event.start_date().format(DATE_FORMAT).to_string(),
            start_time: event.start_date().format(TIME_FORMAT).to_string(),
            end_date: event.end_date().format(DATE_FORMAT).to_string(),
            end_time: event.end_date().format(TIME_FORMAT).to_string(),
            color: event.color(),
        }
    }

    /// The start timestamp, or `None` if the fields do not form a valid date
    pub fn start(&self) -> Option<NaiveDateTime> {
        combine(&self.start_date, &self.start_time)
    }

    /// The end timestamp, or `None` if the fields do not form a valid date
    pub fn end(&self) -> Option<NaiveDateTime> {
        combine(&self.end_date, &self.end_time)
    }

    pub fn validate(&self) -> Validation {
        validate(&self.title, self.start(), self.end())
    }

    fn description(&self) -> Option<String> {
        if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        }
    }

    /// The fields of a new event, in case this draft is valid
    pub fn to_new_event(&self) -> Result<NewEvent, Validation> {
        match (self.validate(), self.start(), self.end()) {
            (validation, Some(start), Some(end)) if validation.is_valid() => Ok(NewEvent {
                title: self.title.clone(),
                description: self.description(),
                start_date: start,
                end_date: end,
                color: self.color,
            }),
            (validation, _, _) => Err(validation),
        }
    }

    /// An update that overwrites every field of an event with this draft, in case it is valid
    pub fn to_update(&self) -> Result<EventUpdate, Validation> {
        let new = self.to_new_event()?;
        Ok(EventUpdate::default()
            .title(new.title)
            .description(new.description)
            .start_date(new.start_date)
            .end_date(new.end_date)
            .color(new.color))
    }
}

/// Combine a date input and a time input into a timestamp
fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).ok()?;
    Some(date.and_time(time))
}
