use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Day, Session};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTimetableResponse {
    pub day: Day,
    pub date: Option<NaiveDate>,
    pub previous_date: Option<NaiveDate>,
    pub next_date: Option<NaiveDate>,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingSessionsResponse {
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateScheduleResponse {
    pub valid: bool,
    pub count: usize,
}
