use rstest::rstest;
use timetable_api::config::{parse_log_level, parse_origins, ApiConfig};
use tracing::Level;

#[test]
fn test_default_config() {
    let config = ApiConfig::default();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.request_timeout, 30);
    assert!(config.sessions_file.is_none());
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}

#[test]
fn test_parse_origins() {
    assert_eq!(
        parse_origins("http://localhost:5173, https://school.example ,"),
        vec![
            "http://localhost:5173".to_string(),
            "https://school.example".to_string()
        ]
    );
}
