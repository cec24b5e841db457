//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::validate_request;
use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// A body that cannot be read or parsed is reported under the `body` field;
/// constraint violations are reported per field.
///
/// # Example
///
/// ```rust,ignore
/// use demo_park_api::api::extractors::ValidatedJson;
/// use demo_park_api::domain::CreateUser;
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateUser>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_field("body", e.body_text()))?;

        validate_request(&value)?;

        Ok(ValidatedJson(value))
    }
}
