//! Application domain model.
//!
//! An application is a single lead-generation form submission. Records are
//! created once and never updated or deleted; `updated_at` is stamped at
//! creation alongside `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApexError, ApexResult};

/// Name of the collection holding application documents.
pub const APPLICATION_COLLECTION: &str = "application";

/// A stored application as read back from the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Store-assigned document identifier, rendered as text.
    pub id: String,
    pub brand_name: String,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub monthly_revenue: Option<String>,
    pub biggest_struggle: Option<String>,
    /// Documents written outside this service may lack timestamps.
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted from a form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateApplication {
    pub brand_name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub monthly_revenue: Option<String>,
    #[serde(default)]
    pub biggest_struggle: Option<String>,
}

/// A validated application ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub brand_name: String,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub monthly_revenue: Option<String>,
    pub biggest_struggle: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewApplication {
    /// Validate a submission and stamp both timestamps with the current time.
    pub fn new(input: CreateApplication) -> ApexResult<Self> {
        Self::at(input, Utc::now())
    }

    /// Validate a submission and stamp both timestamps with `now`.
    ///
    /// Rejects a `brand_name` that is empty or only whitespace. The name is
    /// stored exactly as submitted otherwise.
    pub fn at(input: CreateApplication, now: DateTime<Utc>) -> ApexResult<Self> {
        if input.brand_name.trim().is_empty() {
            return Err(ApexError::validation("brand_name must not be empty"));
        }

        Ok(Self {
            brand_name: input.brand_name,
            website: input.website,
            instagram: input.instagram,
            monthly_revenue: input.monthly_revenue,
            biggest_struggle: input.biggest_struggle,
            created_at: now,
            updated_at: now,
        })
    }
}
