//! Form body extractor that reports rejections as JSON

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{
    Form,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// `application/x-www-form-urlencoded` body.
///
/// Wraps axum's `Form` so that a missing content type or an undecodable body becomes
/// a 400 `ApiError` instead of a plain-text rejection.
pub struct FormBody<T>(pub T);

impl<T> FromRequest<AppState> for FormBody<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => Ok(FormBody(value)),
                Err(rejection) => Err(ApiError::malformed_request(rejection.body_text())),
            }
        }
    }
}
