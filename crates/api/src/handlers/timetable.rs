//! # Timetable Handlers
//!
//! Read-only views over the session store: the weekly grid, the daily list,
//! upcoming classes, and a strict validation report.
//!
//! Every view is computed from a fresh snapshot of the store on each request;
//! nothing derived is cached between requests.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;
use timetable_core::{
    daily::{sessions_on, step_day, upcoming_sessions, Direction},
    errors::TimetableError,
    grid::{build_weekly_grid, WeeklyGrid},
    models::{
        timetable::{DailyTimetableResponse, UpcomingSessionsResponse, ValidateScheduleResponse},
        ClockTime, Day,
    },
    validation::validate_schedule,
};
use tracing::warn;

use crate::{middleware::error_handling::AppError, ApiState};

pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

/// Query parameters for the daily timetable
///
/// * `date` - Calendar date as `YYYY-MM-DD`; takes precedence over `day`
/// * `day` - Weekday name, e.g. `Monday`
#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub date: Option<String>,
    pub day: Option<String>,
}

/// Query parameters for upcoming sessions. Day and time default to now.
#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub day: Option<String>,
    pub time: Option<String>,
    pub limit: Option<String>,
}

/// Lays every stored session out on the configured weekly grid
///
/// # Endpoint
///
/// ```text
/// GET /api/timetable/weekly
/// ```
///
/// Sessions that cannot be placed are listed under `omitted` rather than
/// failing the request.
#[axum::debug_handler]
pub async fn weekly_grid(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<WeeklyGrid>, AppError> {
    let sessions = state.sessions.list_sessions().await?;
    let grid = build_weekly_grid(&sessions, &state.grid);

    for omission in &grid.omitted {
        warn!(
            session_id = %omission.session_id,
            reason = ?omission.reason,
            "Session left off the weekly grid: {}",
            omission.detail
        );
    }

    Ok(Json(grid))
}

/// Lists one day's sessions in start order
///
/// # Endpoint
///
/// ```text
/// GET /api/timetable/daily?date=2024-01-03
/// GET /api/timetable/daily?day=Wednesday
/// ```
///
/// # Errors
///
/// * `TimetableError::Validation` - neither parameter given, or one is malformed
#[axum::debug_handler]
pub async fn daily_timetable(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyTimetableResponse>, AppError> {
    let (day, date, sessions) = match (&query.date, &query.day) {
        (Some(date), _) => {
            let date = parse_date(date)?;
            let sessions = sessions_on(&state.sessions.list_sessions().await?, date);
            (Day::from(date), Some(date), sessions)
        }
        (None, Some(day)) => {
            let day = day.parse::<Day>()?;
            (day, None, state.sessions.sessions_for_day(day).await?)
        }
        (None, None) => {
            return Err(AppError(TimetableError::Validation(
                "Either a date or a day must be provided".to_string(),
            )));
        }
    };

    Ok(Json(DailyTimetableResponse {
        day,
        date,
        previous_date: date.and_then(|d| step_day(d, Direction::Prev)),
        next_date: date.and_then(|d| step_day(d, Direction::Next)),
        sessions,
    }))
}

/// Next sessions from a point in the week, wrapping into the following week
///
/// # Endpoint
///
/// ```text
/// GET /api/timetable/upcoming?day=Wednesday&time=12:00&limit=3
/// ```
///
/// # Errors
///
/// * `TimetableError::Validation` - `day`, `time` or `limit` is malformed
#[axum::debug_handler]
pub async fn upcoming(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<UpcomingQuery>,
) -> Result<Json<UpcomingSessionsResponse>, AppError> {
    let now = Local::now();

    let day = match &query.day {
        Some(day) => day.parse::<Day>()?,
        None => Day::from(now.weekday()),
    };
    let time = match &query.time {
        Some(time) => ClockTime::parse(time)?,
        None => ClockTime::from(now.time()),
    };
    let limit = match &query.limit {
        Some(limit) => parse_limit(limit)?,
        None => DEFAULT_UPCOMING_LIMIT,
    };

    let sessions = state.sessions.list_sessions().await?;

    Ok(Json(UpcomingSessionsResponse {
        sessions: upcoming_sessions(&sessions, day, time, limit),
    }))
}

/// Runs the strict checks over the whole store
///
/// # Endpoint
///
/// ```text
/// GET /api/timetable/validate
/// ```
///
/// # Errors
///
/// * `TimetableError::Validation` - a session is malformed, unaligned or off the grid
/// * `TimetableError::Conflict` - two sessions overlap on the same day
#[axum::debug_handler]
pub async fn validate(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ValidateScheduleResponse>, AppError> {
    let sessions = state.sessions.list_sessions().await?;
    validate_schedule(&sessions, &state.grid)?;

    Ok(Json(ValidateScheduleResponse {
        valid: true,
        count: sessions.len(),
    }))
}

fn parse_date(value: &str) -> Result<NaiveDate, TimetableError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        TimetableError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD: {}", value, e))
    })
}

fn parse_limit(value: &str) -> Result<usize, TimetableError> {
    value.trim().parse::<usize>().map_err(|e| {
        TimetableError::Validation(format!(
            "Invalid limit '{}', expected a non-negative integer: {}",
            value, e
        ))
    })
}
