//! Single-day timetable and week navigation.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, Day, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

/// Sessions held on `day`, ordered by start time.
///
/// The sort is stable, so sessions starting together keep their input order.
/// Sessions whose start time does not parse go last.
pub fn daily_timetable(sessions: &[Session], day: Day) -> Vec<Session> {
    let mut classes: Vec<Session> = sessions
        .iter()
        .filter(|session| session.day == day)
        .cloned()
        .collect();

    classes.sort_by_key(|session| {
        let start = session.start().ok();
        (start.is_none(), start)
    });

    classes
}

/// The daily view for the weekday `date` falls on.
pub fn sessions_on(sessions: &[Session], date: NaiveDate) -> Vec<Session> {
    daily_timetable(sessions, Day::from(date))
}

/// Moves one calendar day back or forward. Returns `None` only at the limits
/// of the supported date range.
pub fn step_day(date: NaiveDate, direction: Direction) -> Option<NaiveDate> {
    match direction {
        Direction::Prev => date.checked_sub_days(Days::new(1)),
        Direction::Next => date.checked_add_days(Days::new(1)),
    }
}

/// The next `limit` sessions starting at or after `time` on `day`, walking
/// forward through the week and wrapping around to the following week.
///
/// Sessions with unparseable start times are skipped.
pub fn upcoming_sessions(
    sessions: &[Session],
    day: Day,
    time: ClockTime,
    limit: usize,
) -> Vec<Session> {
    let mut ordered: Vec<(usize, ClockTime, &Session)> = sessions
        .iter()
        .filter_map(|session| {
            let start = session.start().ok()?;
            let days_ahead = (session.day.index() + Day::ALL.len() - day.index()) % Day::ALL.len();
            // Earlier today means next week
            let days_ahead = if days_ahead == 0 && start < time {
                Day::ALL.len()
            } else {
                days_ahead
            };
            Some((days_ahead, start, session))
        })
        .collect();

    ordered.sort_by_key(|(days_ahead, start, _)| (*days_ahead, *start));
    ordered
        .into_iter()
        .take(limit)
        .map(|(_, _, session)| session.clone())
        .collect()
}
