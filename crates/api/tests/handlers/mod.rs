mod middleware_test;
mod session_test;
mod timetable_test;
