//! Lenient JSON body extractor

use crate::ApiError;

use std::future::Future;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body, parsed regardless of `Content-Type`.
///
/// An empty or whitespace-only body yields `T::default()`, so handlers report
/// their own missing-field error rather than a parse failure. Anything else
/// that does not deserialize into `T` is rejected as [`ApiError::MalformedBody`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::malformed_body(rejection.body_text()))?;

            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(JsonBody(T::default()));
            }

            serde_json::from_slice(&bytes)
                .map(JsonBody)
                .map_err(|e| ApiError::malformed_body(e.to_string()))
        }
    }
}
