//! Calendar events

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::error::Error;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

use crate::config::DEFAULT_LIGHTEN_FACTOR;
use crate::format;


/// The identifier of an [`Event`].
///
/// It is assigned by the [`EventStore`](crate::store::EventStore) when an event is added, and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventId {
    content: String,
}

impl EventId {
    /// Generate a random EventId.
    ///
    /// It combines the current time (in milliseconds) with a random part, so that ids are never reused within a session
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_simple().to_string();
        let content = format!("{}-{}-{}",
            crate::config::id_prefix(),
            Utc::now().timestamp_millis(),
            &random[..9],
        );
        Self { content }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for EventId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for EventId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<EventId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(EventId{ content })
    }
}



/// The fixed palette events can be painted with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Blue,
    Red,
    Green,
    Amber,
    Purple,
    Pink,
    Cyan,
    Orange,
}

impl EventColor {
    /// Every color of the palette, in the order a color picker shows them
    pub const ALL: [EventColor; 8] = [
        EventColor::Blue,
        EventColor::Red,
        EventColor::Green,
        EventColor::Amber,
        EventColor::Purple,
        EventColor::Pink,
        EventColor::Cyan,
        EventColor::Orange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventColor::Blue   => "blue",
            EventColor::Red    => "red",
            EventColor::Green  => "green",
            EventColor::Amber  => "amber",
            EventColor::Purple => "purple",
            EventColor::Pink   => "pink",
            EventColor::Cyan   => "cyan",
            EventColor::Orange => "orange",
        }
    }

    /// The accent color, used for text and borders
    pub fn hex(&self) -> &'static str {
        match self {
            EventColor::Blue   => "#3b82f6",
            EventColor::Red    => "#ef4444",
            EventColor::Green  => "#10b981",
            EventColor::Amber  => "#f59e0b",
            EventColor::Purple => "#8b5cf6",
            EventColor::Pink   => "#ec4899",
            EventColor::Cyan   => "#06b6d4",
            EventColor::Orange => "#f97316",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            EventColor::Blue   => [0x3b, 0x82, 0xf6],
            EventColor::Red    => [0xef, 0x44, 0x44],
            EventColor::Green  => [0x10, 0xb9, 0x81],
            EventColor::Amber  => [0xf5, 0x9e, 0x0b],
            EventColor::Purple => [0x8b, 0x5c, 0xf6],
            EventColor::Pink   => [0xec, 0x48, 0x99],
            EventColor::Cyan   => [0x06, 0xb6, 0xd4],
            EventColor::Orange => [0xf9, 0x73, 0x16],
        }
    }

    /// The badge background: this color blended toward white
    pub fn lighter(&self) -> String {
        format::to_hex(format::lighten_rgb(self.rgb(), DEFAULT_LIGHTEN_FACTOR))
    }
}

impl Default for EventColor {
    fn default() -> Self {
        EventColor::Blue
    }
}

impl Display for EventColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EventColor {
    type Err = Box<dyn Error>;

    /// Accepts either a palette name (`"blue"`) or any CSS color that matches a palette entry (`"#3b82f6"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(color) = Self::ALL.iter().find(|c| c.name().eq_ignore_ascii_case(trimmed)) {
            return Ok(*color);
        }

        let rgb = format::parse_rgb(trimmed)?;
        Self::ALL.iter()
            .find(|c| c.rgb() == rgb)
            .copied()
            .ok_or_else(|| format!("{} is not part of the event palette", s).into())
    }
}



/// A scheduled calendar event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,
    title: String,
    description: Option<String>,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    color: EventColor,
}

impl Event {
    /// Build an event out of its fields, with an id that has already been assigned
    pub fn from_new(id: EventId, new: NewEvent) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            color: new.color,
        }
    }

    pub fn id(&self) -> &EventId                { &self.id          }
    pub fn title(&self) -> &str                 { &self.title       }
    pub fn description(&self) -> Option<&str>   { self.description.as_deref() }
    pub fn start_date(&self) -> NaiveDateTime   { self.start_date   }
    pub fn end_date(&self) -> NaiveDateTime     { self.end_date     }
    pub fn color(&self) -> EventColor           { self.color        }

    /// Returns this event without its id, e.g. to compare it with what was given to the store
    pub fn fields(&self) -> NewEvent {
        NewEvent {
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            color: self.color,
        }
    }
}



/// The fields of an event that has not been added to a store yet
#[derive(Clone, Debug, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub color: EventColor,
}

impl NewEvent {
    /// Create the fields of an event, with no description and the default color
    pub fn new<S: Into<String>>(title: S, start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            description: None,
            start_date,
            end_date,
            color: EventColor::default(),
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }
}



/// A partial update of an event.
///
/// Every field that is `None` is left untouched. There is no way to change the id of an event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventUpdate {
    pub title: Option<String>,
    /// `Some(None)` removes the description
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub color: Option<EventColor>,
}

impl EventUpdate {
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn start_date(mut self, start_date: NaiveDateTime) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: NaiveDateTime) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns whether this update would leave any event unchanged
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge these fields into `event`
    pub fn apply_to(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(start_date) = self.start_date {
            event.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            event.end_date = end_date;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn random_ids_differ() {
        let a = EventId::random();
        let b = EventId::random();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("event-"));
        assert_eq!(a.as_str().split('-').count(), 3);
    }

    #[test]
    fn color_from_name_or_hex() {
        assert_eq!("amber".parse::<EventColor>().unwrap(), EventColor::Amber);
        assert_eq!("Cyan".parse::<EventColor>().unwrap(), EventColor::Cyan);
        assert_eq!("#8b5cf6".parse::<EventColor>().unwrap(), EventColor::Purple);
        assert!("#123456".parse::<EventColor>().is_err());
        assert!("not a color".parse::<EventColor>().is_err());
    }

    #[test]
    fn palette_hex_matches_rgb() {
        for color in EventColor::ALL.iter() {
            assert_eq!(format::to_hex(color.rgb()), color.hex());
        }
    }

    #[test]
    fn update_only_touches_given_fields() {
        let new = NewEvent::new("Standup", at(9, 0), at(9, 30))
            .with_description("daily")
            .with_color(EventColor::Green);
        let mut event = Event::from_new(EventId::from("event-1"), new.clone());

        EventUpdate::default().title("Retro").apply_to(&mut event);
        assert_eq!(event.title(), "Retro");
        assert_eq!(event.id(), &EventId::from("event-1"));
        assert_eq!(event.description(), Some("daily"));
        assert_eq!(event.start_date(), new.start_date);
        assert_eq!(event.end_date(), new.end_date);
        assert_eq!(event.color(), EventColor::Green);

        EventUpdate::default().description(None).apply_to(&mut event);
        assert_eq!(event.description(), None);
    }

    #[test]
    fn serialized_shape() {
        let new = NewEvent::new("Standup", at(9, 0), at(9, 30)).with_color(EventColor::Pink);
        let event = Event::from_new(EventId::from("event-42"), new);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], "event-42");
        assert_eq!(json["color"], "pink");
        assert_eq!(json["startDate"], "2026-10-17T09:00:00");
        assert_eq!(json["endDate"], "2026-10-17T09:30:00");

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
