pub mod error;
pub mod exercises;
pub mod extractors;
pub mod logs;
pub mod user_lookup;
pub mod users;
