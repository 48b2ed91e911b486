pub mod clock;
pub mod day;
pub mod session;
pub mod timetable;

pub use clock::ClockTime;
pub use day::Day;
pub use session::Session;
