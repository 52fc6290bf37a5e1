use crate::{ApiError, AppState};

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Query string extractor; an undecodable query string becomes a 400 `ApiError`.
pub struct QueryParams<T>(pub T);

impl<T> FromRequestParts<AppState> for QueryParams<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Query::<T>::from_request_parts(parts, state).await {
                Ok(Query(value)) => Ok(QueryParams(value)),
                Err(rejection) => Err(ApiError::malformed_request(rejection.body_text())),
            }
        }
    }
}
