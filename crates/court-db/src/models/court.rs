//! Court database model

use sqlx::FromRow;

/// Row shape for the distinct-locations query
#[derive(Debug, Clone, FromRow)]
pub struct LocationModel {
    pub location: String,
    pub image: String,
}
