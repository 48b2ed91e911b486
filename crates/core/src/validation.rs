//! Strict input checks for callers that would rather reject a schedule than
//! have the grid builder quietly leave sessions out.

use std::collections::HashSet;

use crate::errors::{TimetableError, TimetableResult};
use crate::grid::GridDefinition;
use crate::models::{ClockTime, Session};

/// Checks one session against the grid it will be drawn on.
///
/// # Errors
///
/// * `TimetableError::Validation` - malformed times, end not after start,
///   day not on the grid, start not on a slot mark, or end past closing time
pub fn validate_session(
    session: &Session,
    definition: &GridDefinition,
) -> TimetableResult<(ClockTime, ClockTime)> {
    let (start, end) = session.interval()?;

    if definition.day_index(session.day).is_none() {
        return Err(TimetableError::Validation(format!(
            "Session '{}' is on {}, which is not on the timetable",
            session.id, session.day
        )));
    }

    if definition.slot_index(start).is_none() {
        return Err(TimetableError::Validation(format!(
            "Session '{}' starts at {}, which is not on a {}-minute slot between {} and closing",
            session.id, start, definition.slot_minutes, definition.first_slot
        )));
    }

    if u32::from(end.minutes()) > definition.closes_at() {
        return Err(TimetableError::Validation(format!(
            "Session '{}' ends at {}, after the timetable closes",
            session.id, end
        )));
    }

    Ok((start, end))
}

/// Checks every session, then rejects duplicate ids and same-day overlaps.
///
/// # Errors
///
/// * `TimetableError::Validation` - the first invalid session or duplicate id
/// * `TimetableError::Conflict` - two sessions on one day overlap in time
pub fn validate_schedule(sessions: &[Session], definition: &GridDefinition) -> TimetableResult<()> {
    let mut seen = HashSet::new();
    let mut intervals = Vec::with_capacity(sessions.len());

    for session in sessions {
        if !seen.insert(session.id.as_str()) {
            return Err(TimetableError::Validation(format!(
                "Duplicate session id '{}'",
                session.id
            )));
        }

        let (start, end) = validate_session(session, definition)?;
        intervals.push((session, start, end));
    }

    intervals.sort_by_key(|(session, start, _)| (session.day, *start));

    for pair in intervals.windows(2) {
        let (first, _, first_end) = pair[0];
        let (second, second_start, _) = pair[1];

        if first.day == second.day && second_start < first_end {
            return Err(TimetableError::Conflict(format!(
                "'{}' and '{}' overlap on {}",
                first.id, second.id, first.day
            )));
        }
    }

    Ok(())
}
