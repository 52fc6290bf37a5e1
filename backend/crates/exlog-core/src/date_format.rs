//! Human-readable rendering of exercise dates
//!
//! Every date leaves the service as `"<Weekday> <Month> <Day> <Year>"`, for example
//! `"Sun Jan 15 2023"`: English abbreviations, unpadded day, four-digit year.

use crate::ExerciseDate;

const DISPLAY_FORMAT: &str = "%a %b %-d %Y";

/// Render a date in the fixed display form. Time of day is discarded.
pub fn format_date(date: &ExerciseDate) -> String {
    date.calendar_date().format(DISPLAY_FORMAT).to_string()
}
