use crate::ApiError;

use uuid::Uuid;

/// Parse a user id from the request path.
///
/// An id that is not a UUID cannot name a stored user, so it is reported the same way
/// as an unknown one.
#[track_caller]
pub fn parse_user_id(user_id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(user_id.trim()).map_err(|_| ApiError::user_not_found(user_id))
}
