//! Custom Extractors
//!
//! Axum extractors that turn malformed requests into `AppError` responses.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::BookId;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Book id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookIdPath(pub BookId);

impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid book ID".into()))?;

        parse_book_id(&raw).map(BookIdPath)
    }
}

/// Parse a path id, rejecting anything that is not a plain integer.
pub fn parse_book_id(raw: &str) -> Result<BookId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid book ID: {raw}")))
}

/// JSON body that has been deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(validation_error)?;

        Ok(ValidatedJson(value))
    }
}

/// Deserialize and validate a raw JSON body.
pub fn validated_from_slice<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Failed to parse request body: {e}")))?;

    value.validate().map_err(validation_error)?;

    Ok(value)
}
