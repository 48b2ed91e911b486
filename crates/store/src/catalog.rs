//! Demo classes the timetable starts with when no sessions file is given.

use timetable_core::models::{Day, Session};

pub fn default_sessions() -> Vec<Session> {
    vec![
        Session::new("1", "Computer Science 101", Day::Monday, "09:00", "10:30")
            .with_instructor("Dr. Alan Turing")
            .with_location("Building A, Room 101")
            .with_color("bg-blue-500"),
        Session::new("2", "Introduction to Physics", Day::Tuesday, "10:30", "12:00")
            .with_instructor("Dr. Marie Curie")
            .with_location("Building B, Room 205")
            .with_color("bg-green-500"),
        Session::new("3", "Advanced Mathematics", Day::Monday, "11:00", "12:30")
            .with_instructor("Prof. Katherine Johnson")
            .with_location("Building C, Room 310")
            .with_color("bg-purple-500"),
        Session::new("4", "Data Structures & Algorithms", Day::Wednesday, "14:00", "15:30")
            .with_instructor("Dr. Grace Hopper")
            .with_location("Building A, Room 203")
            .with_color("bg-yellow-500"),
        Session::new("5", "Web Development", Day::Thursday, "15:30", "17:00")
            .with_instructor("Prof. Tim Berners-Lee")
            .with_location("Building D, Room 405")
            .with_color("bg-red-500"),
        Session::new("6", "Database Systems", Day::Friday, "13:00", "14:30")
            .with_instructor("Dr. Edgar Codd")
            .with_location("Building B, Room 201")
            .with_color("bg-indigo-500"),
        Session::new("7", "Computer Networks", Day::Thursday, "09:00", "10:30")
            .with_instructor("Dr. Vint Cerf")
            .with_location("Building A, Room 105")
            .with_color("bg-pink-500"),
        Session::new("8", "Artificial Intelligence", Day::Wednesday, "10:00", "11:30")
            .with_instructor("Prof. John McCarthy")
            .with_location("Building C, Room 302")
            .with_color("bg-cyan-500"),
    ]
}
