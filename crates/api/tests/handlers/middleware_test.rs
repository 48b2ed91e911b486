use axum::http::StatusCode;
use rstest::rstest;
use timetable_api::middleware::error_handling::{map_error, AppError};
use timetable_core::errors::TimetableError;

#[rstest]
#[case(TimetableError::NotFound("Session not found".to_string()), StatusCode::NOT_FOUND)]
#[case(TimetableError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(TimetableError::Conflict("Sessions overlap".to_string()), StatusCode::CONFLICT)]
#[case(TimetableError::Internal(eyre::eyre!("Store failed")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: TimetableError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_becomes_internal_error() {
    let error = AppError::from(eyre::eyre!("Store failed"));

    assert!(matches!(error.0, TimetableError::Internal(_)));
}
