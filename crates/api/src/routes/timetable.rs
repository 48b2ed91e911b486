use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/timetable/weekly",
            get(handlers::timetable::weekly_grid),
        )
        .route(
            "/api/timetable/daily",
            get(handlers::timetable::daily_timetable),
        )
        .route(
            "/api/timetable/upcoming",
            get(handlers::timetable::upcoming),
        )
        .route(
            "/api/timetable/validate",
            get(handlers::timetable::validate),
        )
}
