//! Day grids of the month and week views
//!
//! [`month_grid`] and [`week_grid`] only generate dates. [`month_cells`] and [`week_columns`]
//! pair these dates with the events of an [`EventSource`], the way the views render them.

use std::collections::HashMap;
use std::ops::Range;

use bitflags::bitflags;
use chrono::NaiveDate;

use crate::config::MAX_EVENTS_PER_CELL;
use crate::event::{Event, EventId};
use crate::format;
use crate::overlap::group_overlapping_events;
use crate::traits::EventSource;
use crate::utils;

/// Number of days of a month grid (6 full weeks)
pub const MONTH_GRID_LEN: usize = 42;
/// Number of days of a week grid
pub const WEEK_GRID_LEN: usize = 7;


/// The 42 consecutive days of a month view: the Sunday on or before the 1st of the month of `reference`, and the 41 days after it.
///
/// This always covers the whole month, padded with days of the adjacent months.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = utils::start_of_week(utils::start_of_month(reference));
    consecutive_days(first, MONTH_GRID_LEN)
}

/// The 7 consecutive days of the week (Sunday to Saturday) `reference` is in
pub fn week_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = utils::start_of_week(reference);
    consecutive_days(first, WEEK_GRID_LEN)
}

fn consecutive_days(first: NaiveDate, count: usize) -> Vec<NaiveDate> {
    first.iter_days().take(count).collect()
}

/// The hour rows of the week time grid
pub fn hours() -> Range<u32> {
    0..24
}


bitflags! {
    /// How a month cell should be highlighted
    pub struct CellFlags: u8 {
        /// The day belongs to the displayed month (and not to the padding)
        const IN_MONTH = 1;
        /// The day is today
        const TODAY = 2;
        /// The day is the selected date
        const SELECTED = 4;
    }
}

/// A day of the month view, with the events that cover it
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell<'a> {
    date: NaiveDate,
    events: Vec<&'a Event>,
    flags: CellFlags,
}

impl<'a> GridCell<'a> {
    pub fn date(&self) -> NaiveDate             { self.date      }
    pub fn events(&self) -> &[&'a Event]        { &self.events   }
    pub fn flags(&self) -> CellFlags            { self.flags     }

    /// The events that fit in the cell
    pub fn visible_events(&self) -> &[&'a Event] {
        let shown = self.events.len().min(MAX_EVENTS_PER_CELL);
        &self.events[..shown]
    }

    /// How many events do not fit in the cell
    pub fn overflow(&self) -> usize {
        self.events.len().saturating_sub(MAX_EVENTS_PER_CELL)
    }
}

/// Build the cells of the month view around `reference`
pub fn month_cells<'a, S>(source: &'a S, reference: NaiveDate, selected: Option<NaiveDate>, today: NaiveDate) -> Vec<GridCell<'a>>
where
    S: EventSource,
{
    month_grid(reference)
        .into_iter()
        .map(|date| {
            let mut flags = CellFlags::empty();
            flags.set(CellFlags::IN_MONTH, utils::is_same_month(date, reference));
            flags.set(CellFlags::TODAY, date == today);
            flags.set(CellFlags::SELECTED, selected == Some(date));

            GridCell {
                date,
                events: source.events_for_date(date),
                flags,
            }
        })
        .collect()
}


/// An event positioned in a day column of the week view
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedEvent<'a> {
    event: &'a Event,
    top: f64,
    height: f64,
    lane: usize,
}

impl<'a> PlacedEvent<'a> {
    pub fn event(&self) -> &'a Event    { self.event  }
    /// Offset from the top of the column, in percent
    pub fn top(&self) -> f64            { self.top    }
    /// Height, in percent of the column
    pub fn height(&self) -> f64         { self.height }
    /// Index of the stacking group of this event in its column
    pub fn lane(&self) -> usize         { self.lane   }
}

/// A day of the week view
#[derive(Clone, Debug, PartialEq)]
pub struct DayColumn<'a> {
    date: NaiveDate,
    events: Vec<PlacedEvent<'a>>,
    lanes: usize,
}

impl<'a> DayColumn<'a> {
    pub fn date(&self) -> NaiveDate                 { self.date   }
    /// The events of this day, in the order the source returned them
    pub fn events(&self) -> &[PlacedEvent<'a>]      { &self.events }
    /// Number of stacking groups in this column
    pub fn lanes(&self) -> usize                    { self.lanes  }
}

/// Build the columns of the week view around `reference`.
///
/// Events are fetched once for the whole week, then dispatched to every day they overlap (exact timestamps).
/// Their vertical position only depends on their time of day, so a multi-day event is drawn at the same
/// place in each of its columns.
pub fn week_columns<'a, S>(source: &'a S, reference: NaiveDate) -> Vec<DayColumn<'a>>
where
    S: EventSource,
{
    let days = week_grid(reference);
    let (week_start, _) = utils::day_bounds(days[0]);
    let (_, week_end) = utils::day_bounds(days[WEEK_GRID_LEN - 1]);
    let week_events = source.events_for_range(week_start, week_end);
    log::debug!("{} events in the week of {}", week_events.len(), days[0]);

    days.into_iter()
        .map(|date| {
            let (day_start, day_end) = utils::day_bounds(date);
            let day_events: Vec<&Event> = week_events.iter()
                .copied()
                .filter(|event| event.start_date() <= day_end && event.end_date() >= day_start)
                .collect();

            let groups = group_overlapping_events(day_events.iter().copied());
            let lane_of: HashMap<&EventId, usize> = groups.iter()
                .enumerate()
                .flat_map(|(lane, group)| group.iter().map(move |event| (event.id(), lane)))
                .collect();

            let events = day_events.iter()
                .map(|&event| PlacedEvent {
                    event,
                    top: format::event_top_percent(event.start_date()),
                    height: format::event_height_percent(event.start_date(), event.end_date()),
                    lane: lane_of.get(event.id()).copied().unwrap_or_default(),
                })
                .collect();

            DayColumn {
                date,
                events,
                lanes: groups.len(),
            }
        })
        .collect()
}
