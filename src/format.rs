//! Presentation helpers: colors, labels and time-grid positions
//!
//! Everything here is a pure function of its arguments.

use std::error::Error;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use chrono::format::{Item, StrftimeItems};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Weekday column headers, starting on Sunday
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];


/// Parse any CSS color (`#rrggbb`, `#rgb`, `rgb(...)`, names...) into its RGB channels. Alpha is ignored.
pub fn parse_rgb(color: &str) -> Result<[u8; 3], Box<dyn Error>> {
    let parsed = csscolorparser::parse(color)?;
    Ok([
        unit_to_channel(f64::from(parsed.r)),
        unit_to_channel(f64::from(parsed.g)),
        unit_to_channel(f64::from(parsed.b)),
    ])
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().max(0.0).min(255.0) as u8
}

/// Format RGB channels as a lowercase `#rrggbb` string
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Blend each channel toward white by `factor` (0 keeps the color, 1 gives white).
///
/// `factor` is clamped to `[0, 1]`
pub fn lighten_rgb(rgb: [u8; 3], factor: f64) -> [u8; 3] {
    let factor = factor.max(0.0).min(1.0);
    let blend = |channel: u8| {
        let channel = f64::from(channel);
        (channel + (255.0 - channel) * factor).round().min(255.0) as u8
    };
    [blend(rgb[0]), blend(rgb[1]), blend(rgb[2])]
}

/// Returns a lighter version of `color`, used as the background of event badges
///
/// ```
/// assert_eq!(wall_planner::format::lighten_color("#3b82f6", 0.85).unwrap(), "#e2ecfe");
/// ```
pub fn lighten_color(color: &str, factor: f64) -> Result<String, Box<dyn Error>> {
    let rgb = parse_rgb(color)?;
    Ok(to_hex(lighten_rgb(rgb, factor)))
}

/// Label of an hour row in the week view: `0` is "12 AM", `13` is "1 PM".
///
/// Hours past 23 wrap around.
pub fn format_hour(hour: u32) -> String {
    match hour % 24 {
        0 => String::from("12 AM"),
        h if h < 12 => format!("{} AM", h),
        12 => String::from("12 PM"),
        h => format!("{} PM", h - 12),
    }
}

fn minutes_of_day(time: NaiveDateTime) -> f64 {
    f64::from(time.hour() * 60 + time.minute())
}

/// Vertical offset (in percent of the day column) of an event starting at `start`
pub fn event_top_percent(start: NaiveDateTime) -> f64 {
    minutes_of_day(start) / MINUTES_PER_DAY * 100.0
}

/// Height (in percent of the day column) of an event.
///
/// Only the time of day is used: an event that ends on a later day than it starts gets a
/// height that does not reflect its real duration (and may even be negative).
pub fn event_height_percent(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (minutes_of_day(end) - minutes_of_day(start)) / MINUTES_PER_DAY * 100.0
}

/// Format a date with a `strftime`-like pattern (see [`chrono::format::strftime`])
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String, Box<dyn Error>> {
    if StrftimeItems::new(pattern).any(|item| item == Item::Error) {
        return Err(format!("Invalid date pattern {:?}", pattern).into());
    }
    Ok(date.format(pattern).to_string())
}

/// Header of the month view, e.g. "October 2026"
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Header of the week view, e.g. "Oct 11 - Oct 17, 2026"
pub fn week_title(first: NaiveDate, last: NaiveDate) -> String {
    format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
}

/// Time an event starts at, as displayed in its badge, e.g. "9:05 AM"
pub fn time_label(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventColor;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn lightening_moves_toward_white() {
        let source = parse_rgb("#3b82f6").unwrap();
        let lighter = lighten_color("#3b82f6", 0.85).unwrap();
        let lighter_rgb = parse_rgb(&lighter).unwrap();

        for (s, l) in source.iter().zip(lighter_rgb.iter()) {
            assert!(255 - l < 255 - s);
        }
        assert_eq!(lighter, "#e2ecfe");
        assert_eq!(lighten_color("#3b82f6", 0.85).unwrap(), lighter);
    }

    #[test]
    fn lightening_the_whole_palette() {
        for color in EventColor::ALL.iter() {
            let lighter = lighten_color(color.hex(), 0.85).unwrap();
            assert_eq!(lighter.len(), 7);
            assert!(lighter.starts_with('#'));
            assert_eq!(lighter, color.lighter());
        }
    }

    #[test]
    fn lightening_bounds() {
        assert_eq!(lighten_rgb([10, 20, 30], 0.0), [10, 20, 30]);
        assert_eq!(lighten_rgb([10, 20, 30], 1.0), [255, 255, 255]);
        assert_eq!(lighten_rgb([10, 20, 30], 7.0), [255, 255, 255]);
        assert!(lighten_color("#zzzzzz", 0.5).is_err());
    }

    #[test]
    fn hour_labels() {
        assert_eq!(format_hour(0), "12 AM");
        assert_eq!(format_hour(1), "1 AM");
        assert_eq!(format_hour(11), "11 AM");
        assert_eq!(format_hour(12), "12 PM");
        assert_eq!(format_hour(13), "1 PM");
        assert_eq!(format_hour(23), "11 PM");
    }

    #[test]
    fn time_grid_positions() {
        assert_eq!(event_top_percent(at(0, 0)), 0.0);
        assert_eq!(event_top_percent(at(12, 0)), 50.0);
        assert_eq!(event_top_percent(at(6, 0)), 25.0);
        assert_eq!(event_height_percent(at(9, 0), at(15, 0)), 25.0);

        // Spanning midnight: time of day only
        let next_day = at(1, 0) + chrono::Duration::days(1);
        assert!(event_height_percent(at(23, 0), next_day) < 0.0);
    }

    #[test]
    fn titles() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(month_title(date), "October 2026");
        assert_eq!(week_title(NaiveDate::from_ymd_opt(2026, 10, 11).unwrap(), date), "Oct 11 - Oct 17, 2026");
        assert_eq!(time_label(at(9, 5)), "9:05 AM");
        assert_eq!(time_label(at(14, 30)), "2:30 PM");
        assert_eq!(format_date(date, "%Y-%m-%d").unwrap(), "2026-10-17");
        assert!(format_date(date, "%Q").is_err());
    }
}
