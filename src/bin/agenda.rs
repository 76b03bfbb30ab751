use chrono::{Duration, NaiveDate, NaiveDateTime};

use wall_planner::{CalendarSession, EventColor, NewEvent, ViewMode};
use wall_planner::utils;

fn at(day: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    day.and_hms_opt(hour, minute, 0)
}

/// A few events around today, some of them overlapping
fn sample_events(today: NaiveDate) -> Vec<NewEvent> {
    let tomorrow = today + Duration::days(1);
    let later = today + Duration::days(3);
    let before = today - Duration::days(2);

    let samples = vec![
        ("Morning Standup", today, (9, 0), today, (9, 30), EventColor::Blue),
        ("Workshop", today, (9, 15), today, (11, 0), EventColor::Purple),
        ("Lunch", today, (12, 0), today, (13, 0), EventColor::Green),
        ("Team Meeting", tomorrow, (10, 0), tomorrow, (11, 0), EventColor::Blue),
        ("Project Deadline", later, (14, 0), later, (17, 0), EventColor::Red),
        ("Code Review", before, (13, 0), before, (14, 30), EventColor::Amber),
        ("Conference", tomorrow, (8, 0), later, (18, 0), EventColor::Orange),
    ];

    samples.into_iter()
        .filter_map(|(title, start_day, (sh, sm), end_day, (eh, em), color)| {
            let start = at(start_day, sh, sm)?;
            let end = at(end_day, eh, em)?;
            Some(NewEvent::new(title, start, end).with_color(color))
        })
        .collect()
}

fn main() {
    env_logger::init();

    let today = utils::today();
    let mut session = CalendarSession::with_today(today);
    for new in sample_events(today) {
        session.add_event(new);
    }
    log::info!("{} sample events", session.events().len());

    session.set_selected_date(Some(today));
    println!("---- month -----");
    utils::print_month(today, &session.month_cells());

    session.set_view_mode(ViewMode::Week);
    println!("---- week -----");
    utils::print_week(&session.week_columns());
}
