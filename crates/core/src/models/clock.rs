//! Wall-clock times in the `HH:MM` form used by class sessions.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{TimetableError, TimetableResult};

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A time of day with minute precision, stored as minutes since midnight.
///
/// Ordering and equality follow the fractional-hour value
/// (`hour + minute / 60`), so comparisons between clock times are exact
/// integer comparisons rather than floating point ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub fn new(hour: u16, minute: u16) -> TimetableResult<Self> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return Err(TimetableError::Validation(format!(
                "Time {}:{} is out of range",
                hour, minute
            )));
        }

        Ok(Self {
            minutes: hour * MINUTES_PER_HOUR + minute,
        })
    }

    /// Unchecked constructor for compile-time constants; `hour` must be below 24
    /// and `minute` below 60.
    pub(crate) const fn hm(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * MINUTES_PER_HOUR + minute,
        }
    }

    /// Returns `None` when `minutes` falls past the end of the day.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Parses a 24-hour `HH:MM` string. Both fields must be two digits, so
    /// `9:00` and `09:5` are rejected.
    ///
    /// # Errors
    ///
    /// * `TimetableError::Validation` - the value is not a valid `HH:MM` time
    pub fn parse(value: &str) -> TimetableResult<Self> {
        let trimmed = value.trim();
        let bytes = trimmed.as_bytes();
        let zero_padded = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !zero_padded {
            return Err(TimetableError::Validation(format!(
                "Invalid time '{}', expected HH:MM",
                value
            )));
        }

        let time = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|e| {
            TimetableError::Validation(format!("Invalid time '{}', expected HH:MM: {}", value, e))
        })?;

        Ok(Self::from(time))
    }

    pub fn hour(&self) -> u16 {
        self.minutes / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u16 {
        self.minutes % MINUTES_PER_HOUR
    }

    pub fn minutes(&self) -> u16 {
        self.minutes
    }

    /// The fractional-hour value, e.g. `10:30` is `10.5`.
    pub fn as_hours(&self) -> f64 {
        f64::from(self.minutes) / f64::from(MINUTES_PER_HOUR)
    }

    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        self.minutes
            .checked_add(minutes)
            .and_then(Self::from_minutes)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // hour() < 24 and minute() < 60, so this always fits in u16
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
