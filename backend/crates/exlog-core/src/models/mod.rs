pub mod exercise_date;
pub mod exercise_duration;
pub mod log_entry;
pub mod user;
