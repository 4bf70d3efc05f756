//! Collection-level document operations.
//!
//! These are direct pass-throughs to SurrealDB's `CREATE` and `SELECT`
//! statements: no transactions, no batching, no caching. Record keys are
//! UUIDv7 strings, so a table scan in key order is also insertion order.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbError;

/// Insert `record` into `collection` and return the new record key.
pub async fn create_document<C, T>(
    db: &Surreal<C>,
    collection: &str,
    record: T,
) -> Result<String, DbError>
where
    C: Connection,
    T: SurrealValue + Send + 'static,
{
    let id = Uuid::now_v7().to_string();

    let result = db
        .query("CREATE type::record($collection, $id) CONTENT $record")
        .bind(("collection", collection.to_owned()))
        .bind(("id", id.clone()))
        .bind(("record", record))
        .await?;

    let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

    let rows: Vec<T> = result.take(0)?;
    if rows.is_empty() {
        return Err(DbError::NotInserted {
            collection: collection.to_owned(),
            id,
        });
    }

    debug!(collection, id = %id, "Document created");

    Ok(id)
}

/// Fetch up to `limit` documents from `collection` in key order.
///
/// Each row carries its record key, cast to text, as `record_id` alongside
/// the stored fields. A `limit` of zero returns no documents without
/// querying; limits beyond `i64::MAX` are clamped to it.
pub async fn get_documents<C, T>(
    db: &Surreal<C>,
    collection: &str,
    limit: u64,
) -> Result<Vec<T>, DbError>
where
    C: Connection,
    T: SurrealValue,
{
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut result = db
        .query(
            "SELECT <string> meta::id(id) AS record_id, * \
             FROM type::table($collection) \
             LIMIT $limit",
        )
        .bind(("collection", collection.to_owned()))
        .bind(("limit", i64::try_from(limit).unwrap_or(i64::MAX)))
        .await?;

    let rows: Vec<T> = result.take(0)?;

    debug!(collection, count = rows.len(), "Documents fetched");

    Ok(rows)
}

/// Names of the tables defined in the currently selected database.
pub async fn list_collections<C: Connection>(db: &Surreal<C>) -> Result<Vec<String>, DbError> {
    let result = db
        .query("RETURN object::keys((INFO FOR DB).tables)")
        .await?;

    let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

    let mut names: Vec<String> = result.take(0)?;
    names.sort();

    Ok(names)
}
