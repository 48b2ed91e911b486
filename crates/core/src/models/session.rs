use serde::{Deserialize, Serialize};

use crate::errors::{TimetableError, TimetableResult};
use crate::models::{ClockTime, Day};

/// A single scheduled class occurrence.
///
/// Times are kept as the `HH:MM` strings the caller supplied. They are only
/// parsed when a layout needs them, so a malformed record can still be
/// listed and reported instead of being dropped at the door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub instructor: String,
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: String,
    /// Display token for the session's block, passed through untouched
    #[serde(default)]
    pub color: String,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        day: Day,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            instructor: String::new(),
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: String::new(),
            color: String::new(),
        }
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn start(&self) -> TimetableResult<ClockTime> {
        ClockTime::parse(&self.start_time)
    }

    pub fn end(&self) -> TimetableResult<ClockTime> {
        ClockTime::parse(&self.end_time)
    }

    /// Parses both ends and checks `start < end`.
    pub fn interval(&self) -> TimetableResult<(ClockTime, ClockTime)> {
        let start = self.start()?;
        let end = self.end()?;

        if start >= end {
            return Err(TimetableError::Validation(format!(
                "Session '{}' ends at {} which is not after its start {}",
                self.id, end, start
            )));
        }

        Ok((start, end))
    }
}
