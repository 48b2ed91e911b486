use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use timetable_core::models::{
    timetable::{DailyTimetableResponse, UpcomingSessionsResponse, ValidateScheduleResponse},
    Day, Session,
};
use timetable_store::{catalog::default_sessions, MockSessionRepository};

use crate::test_utils::{catalog_server, server_with, sessions_server};

fn ids(sessions: &[Session]) -> Vec<&str> {
    sessions.iter().map(|session| session.id.as_str()).collect()
}

#[tokio::test]
async fn test_weekly_grid() {
    let server = sessions_server(vec![
        Session::new("1", "Computer Science 101", Day::Monday, "09:00", "10:30"),
        Session::new("2", "Introduction to Physics", Day::Tuesday, "10:30", "12:00"),
        Session::new("3", "Odd Start", Day::Friday, "09:15", "10:15"),
    ]);

    let response = server.get("/api/timetable/weekly").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let grid: Value = response.json();
    assert_eq!(grid["days"].as_array().map(Vec::len), Some(5));
    assert_eq!(grid["slots"].as_array().map(Vec::len), Some(24));

    let placed: Vec<(String, String, String, u64)> = grid["cells"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|cell| {
            cell["placements"].as_array().unwrap().iter().map(move |p| {
                (
                    cell["day"].as_str().unwrap().to_string(),
                    cell["slot"].as_str().unwrap().to_string(),
                    p["session"]["id"].as_str().unwrap().to_string(),
                    p["span"].as_u64().unwrap(),
                )
            })
        })
        .collect();

    assert_eq!(
        placed,
        vec![
            ("Monday".to_string(), "09:00".to_string(), "1".to_string(), 3),
            ("Tuesday".to_string(), "10:30".to_string(), "2".to_string(), 3),
        ]
    );
    assert_eq!(grid["omitted"][0]["sessionId"], "3");
    assert_eq!(grid["omitted"][0]["reason"], "unaligned");
}

#[tokio::test]
async fn test_weekly_grid_omits_unpadded_times() {
    let server = sessions_server(vec![Session::new("1", "Unpadded", Day::Monday, "9:00", "10:30")]);

    let response = server.get("/api/timetable/weekly").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let grid: Value = response.json();
    assert_eq!(grid["omitted"][0]["sessionId"], "1");
    assert_eq!(grid["omitted"][0]["reason"], "invalidTime");
    assert!(grid["cells"]
        .as_array()
        .unwrap()
        .iter()
        .all(|cell| cell["placements"].as_array().unwrap().is_empty()));
}

#[tokio::test]
async fn test_daily_by_date() {
    let server = catalog_server();

    // 2024-01-03 is a Wednesday
    let response = server
        .get("/api/timetable/daily")
        .add_query_param("date", "2024-01-03")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let daily: DailyTimetableResponse = response.json();
    assert_eq!(daily.day, Day::Wednesday);
    assert_eq!(ids(&daily.sessions), vec!["8", "4"]);
    assert_eq!(daily.previous_date.map(|d| d.to_string()), Some("2024-01-02".to_string()));
    assert_eq!(daily.next_date.map(|d| d.to_string()), Some("2024-01-04".to_string()));
}

#[tokio::test]
async fn test_daily_by_day_name() {
    let server = catalog_server();

    let response = server
        .get("/api/timetable/daily")
        .add_query_param("day", "monday")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let daily: DailyTimetableResponse = response.json();
    assert_eq!(daily.day, Day::Monday);
    assert_eq!(daily.date, None);
    assert_eq!(ids(&daily.sessions), vec!["1", "3"]);
}

#[tokio::test]
async fn test_daily_on_a_free_day_is_empty() {
    let server = catalog_server();

    let response = server
        .get("/api/timetable/daily")
        .add_query_param("day", "Saturday")
        .await;

    let daily: DailyTimetableResponse = response.json();
    assert!(daily.sessions.is_empty());
}

#[tokio::test]
async fn test_daily_rejects_bad_input() {
    let server = catalog_server();

    let missing = server.get("/api/timetable/daily").await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);

    let bad_date = server
        .get("/api/timetable/daily")
        .add_query_param("date", "03/01/2024")
        .await;
    assert_eq!(bad_date.status_code(), StatusCode::BAD_REQUEST);

    let bad_day = server
        .get("/api/timetable/daily")
        .add_query_param("day", "Funday")
        .await;
    assert_eq!(bad_day.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upcoming() {
    let server = catalog_server();

    let response = server
        .get("/api/timetable/upcoming")
        .add_query_param("day", "Wednesday")
        .add_query_param("time", "12:00")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let upcoming: UpcomingSessionsResponse = response.json();
    assert_eq!(ids(&upcoming.sessions), vec!["4", "7", "5"]);
}

#[tokio::test]
async fn test_upcoming_with_limit() {
    let server = catalog_server();

    let response = server
        .get("/api/timetable/upcoming")
        .add_query_param("day", "Friday")
        .add_query_param("time", "15:00")
        .add_query_param("limit", "1")
        .await;

    let upcoming: UpcomingSessionsResponse = response.json();
    assert_eq!(ids(&upcoming.sessions), vec!["1"]);
}

#[tokio::test]
async fn test_upcoming_defaults_to_now() {
    let server = catalog_server();

    let response = server.get("/api/timetable/upcoming").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let upcoming: UpcomingSessionsResponse = response.json();
    assert_eq!(upcoming.sessions.len(), 3);
}

#[tokio::test]
async fn test_upcoming_rejects_bad_time() {
    let server = catalog_server();

    let response = server
        .get("/api/timetable/upcoming")
        .add_query_param("time", "noon")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upcoming_rejects_bad_limit() {
    let server = catalog_server();

    let response = server
        .get("/api/timetable/upcoming")
        .add_query_param("day", "Monday")
        .add_query_param("time", "09:00")
        .add_query_param("limit", "many")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn test_validate_catalog() {
    let server = catalog_server();

    let response = server.get("/api/timetable/validate").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let report: ValidateScheduleResponse = response.json();
    assert!(report.valid);
    assert_eq!(report.count, 8);
}

#[tokio::test]
async fn test_validate_reports_conflicts() {
    let mut sessions = default_sessions();
    sessions.push(Session::new("9", "Clash", Day::Monday, "10:00", "11:00"));
    let server = sessions_server(sessions);

    let response = server.get("/api/timetable/validate").await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_validate_reports_unaligned_sessions() {
    let server = sessions_server(vec![Session::new("1", "Odd Start", Day::Monday, "09:15", "10:15")]);

    let response = server.get("/api/timetable/validate").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_daily_uses_the_store_ordering() {
    let mut repo = MockSessionRepository::new();
    repo.expect_sessions_for_day()
        .times(1)
        .returning(|day| {
            assert_eq!(day, Day::Friday);
            Ok(vec![Session::new("6", "Database Systems", Day::Friday, "13:00", "14:30")])
        });
    let server = server_with(Arc::new(repo));

    let response = server
        .get("/api/timetable/daily")
        .add_query_param("day", "Friday")
        .await;

    let daily: DailyTimetableResponse = response.json();
    assert_eq!(ids(&daily.sessions), vec!["6"]);
}
