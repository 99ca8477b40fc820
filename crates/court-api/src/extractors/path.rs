//! Path parameter extractors
//!
//! Type-safe extraction of identifiers from path parameters, with
//! rejections mapped to the structured error body.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Typed path extractor with structured rejections
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(IdPath(inner))
    }
}

/// Path parameters with slot_id
#[derive(Debug, serde::Deserialize)]
pub struct SlotIdPath {
    pub slot_id: i64,
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: i64,
}

/// Path parameters with user_id and slot_id
#[derive(Debug, serde::Deserialize)]
pub struct UserSlotPath {
    pub user_id: i64,
    pub slot_id: i64,
}

/// Path parameters with a location name
#[derive(Debug, serde::Deserialize)]
pub struct LocationPath {
    pub name: String,
}
