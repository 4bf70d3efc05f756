//! Apex Database — SurrealDB connection management and the document
//! adapter behind the `apex-core` repository traits.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Collection-level document operations ([`create_document`],
//!   [`get_documents`], [`list_collections`])
//! - Repository implementations ([`repository`])
//! - Error types ([`DbError`])

mod connection;
pub mod document;
mod error;
pub mod repository;

pub use connection::{DbConfig, DbManager};
pub use document::{create_document, get_documents, list_collections};
pub use error::DbError;
