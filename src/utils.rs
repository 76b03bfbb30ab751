//! Some utility functions

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::Event;
use crate::grid::{CellFlags, DayColumn, GridCell};
use crate::format;

/// Returns the current calendar day, in local time
pub fn today() -> NaiveDate {
    Local::now().naive_local().date()
}

/// Returns the Sunday on or before `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Returns the first day of the month `date` is in
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Whether two timestamps fall on the same calendar day
pub fn is_same_day(left: NaiveDateTime, right: NaiveDateTime) -> bool {
    left.date() == right.date()
}

/// Whether two dates are in the same month of the same year
pub fn is_same_month(left: NaiveDate, right: NaiveDate) -> bool {
    left.year() == right.year() && left.month() == right.month()
}

/// The first and last instants of a calendar day (00:00:00.000 and 23:59:59.999)
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (start, end)
}


/// A debug utility that pretty-prints a month grid
pub fn print_month(reference: NaiveDate, cells: &[GridCell]) {
    println!("{}", format::month_title(reference));
    println!("{}", format::WEEKDAY_LABELS.join("  "));
    for week in cells.chunks(7) {
        let line: Vec<String> = week.iter()
            .map(|cell| {
                let marker = if cell.flags().contains(CellFlags::TODAY) {
                    "*"
                } else if cell.flags().contains(CellFlags::SELECTED) {
                    ">"
                } else if cell.flags().contains(CellFlags::IN_MONTH) {
                    " "
                } else {
                    "."
                };
                match cell.events().len() {
                    0 => format!("{}{:>2} ", marker, cell.date().day()),
                    n => format!("{}{:>2}{}", marker, cell.date().day(), n),
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }

    for cell in cells {
        if cell.events().is_empty() || cell.flags().contains(CellFlags::IN_MONTH) == false {
            continue;
        }
        println!("  {}", cell.date());
        for event in cell.visible_events() {
            print_event(event);
        }
        if cell.overflow() > 0 {
            println!("    +{} more", cell.overflow());
        }
    }
}

/// A debug utility that pretty-prints the week time grid
pub fn print_week(columns: &[DayColumn]) {
    if let (Some(first), Some(last)) = (columns.first(), columns.last()) {
        println!("{}", format::week_title(first.date(), last.date()));
    }
    for column in columns {
        println!("  {} {}", column.date().format("%a"), column.date().day());
        for placed in column.events() {
            println!("    [lane {}] {:5.1}% +{:5.1}%  {}\t{}",
                placed.lane(), placed.top(), placed.height(),
                format::time_label(placed.event().start_date()), placed.event().title());
        }
    }
}

pub fn print_event(event: &Event) {
    println!("    {} {} - {}\t{}\t({})",
        event.color().hex(),
        format::time_label(event.start_date()),
        format::time_label(event.end_date()),
        event.title(),
        event.id(),
    );
}
