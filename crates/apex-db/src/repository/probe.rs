//! SurrealDB implementation of [`DatabaseProbe`].

use apex_core::error::ApexResult;
use apex_core::repository::DatabaseProbe;
use surrealdb::{Connection, Surreal};

use crate::document::list_collections;

/// Connectivity check that enumerates the tables of the current database.
#[derive(Clone)]
pub struct SurrealDatabaseProbe<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealDatabaseProbe<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> DatabaseProbe for SurrealDatabaseProbe<C> {
    async fn collections(&self) -> ApexResult<Vec<String>> {
        Ok(list_collections(&self.db).await?)
    }
}
