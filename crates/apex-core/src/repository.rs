//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. The HTTP layer depends only on
//! these traits; the SurrealDB implementations live in `apex-db`.

use crate::error::ApexResult;
use crate::models::application::{Application, NewApplication};

/// Default number of applications returned by a list query.
pub const DEFAULT_LIST_LIMIT: u64 = 20;

pub trait ApplicationRepository: Send + Sync {
    /// Insert one application and return its new identifier as text.
    fn create(&self, input: NewApplication) -> impl Future<Output = ApexResult<String>> + Send;

    /// Return up to `limit` applications in the store's natural order.
    fn list(&self, limit: u64) -> impl Future<Output = ApexResult<Vec<Application>>> + Send;
}

/// Lightweight connectivity check against the document store.
pub trait DatabaseProbe: Send + Sync {
    /// Names of the collections defined in the current database.
    fn collections(&self) -> impl Future<Output = ApexResult<Vec<String>>> + Send;
}
