use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid date: '{value}' {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },

    /// A log query bound (`from` or `to`) that is not a recognizable date
    #[error("Invalid {bound} date: '{value}' {location}")]
    InvalidBound {
        bound: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
