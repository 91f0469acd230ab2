use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;

use super::error::{error_codes, ApiError};

/// JSON body extractor that answers 400 instead of axum's 422 for bodies
/// that do not deserialize.
///
/// 413 from the body limit layer is kept as is.
pub struct JsonBadRequest<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBadRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBadRequest(value)),
            Err(rejection) => {
                let too_large = matches!(rejection, JsonRejection::BytesRejection(_))
                    && rejection.status() == StatusCode::PAYLOAD_TOO_LARGE;
                let message = rejection.body_text();
                if too_large {
                    Err(ApiError::new(error_codes::PAYLOAD_TOO_LARGE, message))
                } else {
                    Err(ApiError::validation_error(message))
                }
            }
        }
    }
}

/// Query string extractor whose rejections carry the `{code, message}` body.
pub struct QueryBadRequest<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryBadRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| QueryBadRequest(value))
            .map_err(|rejection| ApiError::validation_error(rejection.body_text()))
    }
}
