pub mod session;
pub mod timetable;
