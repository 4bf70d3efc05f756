//! Request and response bodies for the HTTP API.

use apex_core::models::application::Application;
use apex_core::repository::DEFAULT_LIST_LIMIT;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DatabaseStatusResponse {
    pub database: &'static str,
    pub collections: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub ok: bool,
    pub id: String,
}

/// Query string for `GET /applications`.
#[derive(Debug, Deserialize)]
pub struct ListApplicationsQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

/// A stored application with store-native values rendered as text.
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub brand_name: String,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub monthly_revenue: Option<String>,
    pub biggest_struggle: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn timestamp_text(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl From<Application> for ApplicationResponse {
    fn from(app: Application) -> Self {
        Self {
            id: Some(app.id).filter(|id| !id.is_empty()),
            brand_name: app.brand_name,
            website: app.website,
            instagram: app.instagram,
            monthly_revenue: app.monthly_revenue,
            biggest_struggle: app.biggest_struggle,
            created_at: app.created_at.map(timestamp_text),
            updated_at: app.updated_at.map(timestamp_text),
        }
    }
}
