use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::{validation::ValidationError, AppError};

/// JSON extractor that runs declared field validations after deserializing.
///
/// Rejections are structured validation errors: an undeserializable body
/// yields a single `body` issue, while constraint failures yield one issue
/// per offending field.
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
            .map_err(|rejection| ValidationError::body(rejection.body_text()))?;

        value.validate().map_err(ValidationError::from)?;

        Ok(Self(value))
    }
}
