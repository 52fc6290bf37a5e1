pub mod date_format;
pub mod error;
pub mod log_query;
pub mod models;


pub use date_format::format_date;
pub use error::{CoreError, Result};
pub use log_query::LogQuery;
pub use models::exercise_date::ExerciseDate;
pub use models::exercise_duration::ExerciseDuration;
pub use models::log_entry::LogEntry;
pub use models::user::{User, UserSummary};
