//! Which part of the calendar is displayed, and what the user has selected

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils;


/// The layout the calendar is displayed with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Month,
    Week,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Month
    }
}

/// A keyboard move of the focused day
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMove {
    /// The day before
    Left,
    /// The day after
    Right,
    /// The same weekday, one week earlier
    Up,
    /// The same weekday, one week later
    Down,
}

impl FocusMove {
    fn offset(&self) -> Duration {
        match self {
            FocusMove::Left => Duration::days(-1),
            FocusMove::Right => Duration::days(1),
            FocusMove::Up => Duration::days(-7),
            FocusMove::Down => Duration::days(7),
        }
    }
}


/// The navigation state of a calendar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarNavigation {
    view_mode: ViewMode,
    /// The reference date the displayed grid is built around
    current_date: NaiveDate,
    selected_date: Option<NaiveDate>,
    /// The day that has the keyboard focus
    focused_date: Option<NaiveDate>,
}

impl Default for CalendarNavigation {
    fn default() -> Self {
        Self::new(utils::today())
    }
}

impl CalendarNavigation {
    /// A month view around `today`, with nothing selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view_mode: ViewMode::Month,
            current_date: today,
            selected_date: None,
            focused_date: None,
        }
    }

    pub fn view_mode(&self) -> ViewMode                 { self.view_mode     }
    pub fn current_date(&self) -> NaiveDate             { self.current_date  }
    pub fn selected_date(&self) -> Option<NaiveDate>    { self.selected_date }
    pub fn focused_date(&self) -> Option<NaiveDate>     { self.focused_date  }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn set_focused_date(&mut self, date: Option<NaiveDate>) {
        self.focused_date = date;
    }

    pub fn go_to_today(&mut self) {
        self.current_date = utils::today();
    }

    /// Go one month back. The day of month is clamped to the length of the target month (Mar 31st goes to Feb 28th)
    pub fn go_to_previous_month(&mut self) {
        match self.current_date.checked_sub_months(Months::new(1)) {
            Some(date) => self.current_date = date,
            None => log::warn!("Cannot go before {}", self.current_date),
        }
    }

    /// Go one month forward. The day of month is clamped to the length of the target month (Jan 31st goes to Feb 28th)
    pub fn go_to_next_month(&mut self) {
        match self.current_date.checked_add_months(Months::new(1)) {
            Some(date) => self.current_date = date,
            None => log::warn!("Cannot go after {}", self.current_date),
        }
    }

    pub fn go_to_previous_week(&mut self) {
        self.shift_current_date(Duration::days(-7));
    }

    pub fn go_to_next_week(&mut self) {
        self.shift_current_date(Duration::days(7));
    }

    /// Go to the previous month or week, depending on the view mode
    pub fn go_previous(&mut self) {
        match self.view_mode {
            ViewMode::Month => self.go_to_previous_month(),
            ViewMode::Week => self.go_to_previous_week(),
        }
    }

    /// Go to the next month or week, depending on the view mode
    pub fn go_next(&mut self) {
        match self.view_mode {
            ViewMode::Month => self.go_to_next_month(),
            ViewMode::Week => self.go_to_next_week(),
        }
    }

    /// Move the keyboard focus.
    ///
    /// When nothing is focused yet, the focus starts from the selected date, or from the current date.
    /// The current date follows the focus, so that the focused day is always displayed.
    pub fn move_focus(&mut self, direction: FocusMove) {
        let from = self.focused_date
            .or(self.selected_date)
            .unwrap_or(self.current_date);

        match from.checked_add_signed(direction.offset()) {
            Some(date) => {
                self.focused_date = Some(date);
                self.current_date = date;
            },
            None => log::warn!("Cannot move the focus {:?} from {}", direction, from),
        }
    }

    fn shift_current_date(&mut self, offset: Duration) {
        match self.current_date.checked_add_signed(offset) {
            Some(date) => self.current_date = date,
            None => log::warn!("Cannot move {} by {}", self.current_date, offset),
        }
    }
}
