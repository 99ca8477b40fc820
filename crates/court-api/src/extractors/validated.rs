//! JSON body extraction with validation
//!
//! Deserializes the request body and runs `validator` rules before the
//! handler sees it, so handlers only ever receive well-formed input.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON extractor that also applies `Validate` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.to_string()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.to_string()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.to_string()),
        JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.to_string()),
        _ => ApiError::invalid_body("Invalid JSON body"),
    }
}
