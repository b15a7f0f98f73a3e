pub mod backup;
pub mod checkin;
pub mod log;
pub mod reconcile;
pub mod seed;
pub mod timetable;
