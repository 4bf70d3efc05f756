//! SurrealDB implementation of [`ApplicationRepository`].

use apex_core::error::ApexResult;
use apex_core::models::application::{APPLICATION_COLLECTION, Application, NewApplication};
use apex_core::repository::ApplicationRepository;
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::document::{create_document, get_documents};

/// DB-side row struct written on insert. The record key is not part of
/// the content.
#[derive(Debug, SurrealValue)]
struct ApplicationRow {
    brand_name: String,
    website: Option<String>,
    instagram: Option<String>,
    monthly_revenue: Option<String>,
    biggest_struggle: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<NewApplication> for ApplicationRow {
    fn from(app: NewApplication) -> Self {
        Self {
            brand_name: app.brand_name,
            website: app.website,
            instagram: app.instagram,
            monthly_revenue: app.monthly_revenue,
            biggest_struggle: app.biggest_struggle,
            created_at: app.created_at,
            updated_at: app.updated_at,
        }
    }
}

/// DB-side row struct that includes the record key as text via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct ApplicationRowWithId {
    record_id: String,
    brand_name: String,
    website: Option<String>,
    instagram: Option<String>,
    monthly_revenue: Option<String>,
    biggest_struggle: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ApplicationRowWithId {
    fn into_application(self) -> Application {
        Application {
            id: self.record_id,
            brand_name: self.brand_name,
            website: self.website,
            instagram: self.instagram,
            monthly_revenue: self.monthly_revenue,
            biggest_struggle: self.biggest_struggle,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// SurrealDB implementation of the Application repository.
#[derive(Clone)]
pub struct SurrealApplicationRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealApplicationRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> ApplicationRepository for SurrealApplicationRepository<C> {
    async fn create(&self, input: NewApplication) -> ApexResult<String> {
        let id =
            create_document(&self.db, APPLICATION_COLLECTION, ApplicationRow::from(input)).await?;

        info!(id = %id, "Application stored");

        Ok(id)
    }

    async fn list(&self, limit: u64) -> ApexResult<Vec<Application>> {
        let rows: Vec<ApplicationRowWithId> =
            get_documents(&self.db, APPLICATION_COLLECTION, limit).await?;

        Ok(rows
            .into_iter()
            .map(ApplicationRowWithId::into_application)
            .collect())
    }
}
