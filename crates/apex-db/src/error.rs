//! Database-specific error types and conversions.

use apex_core::error::ApexError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Insert into {collection} returned no record for id {id}")]
    NotInserted { collection: String, id: String },
}

impl From<DbError> for ApexError {
    fn from(err: DbError) -> Self {
        ApexError::Database(err.to_string())
    }
}
