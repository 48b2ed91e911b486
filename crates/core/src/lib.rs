//! # Timetable Core
//!
//! Domain types and pure layout routines for the class timetable.
//!
//! - **Models**: sessions, weekdays and wall-clock times
//! - **Grid**: the weekly slot grid builder
//! - **Daily**: the single-day view and week navigation helpers
//! - **Validation**: strict checks for callers that want to reject bad input
//! - **Badge**: status enums mapped to display styles

pub mod badge;
pub mod daily;
pub mod errors;
pub mod grid;
pub mod models;
pub mod validation;
