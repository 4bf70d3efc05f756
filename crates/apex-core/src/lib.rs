//! Apex Core — domain models, error types and repository traits shared by
//! the database and HTTP crates.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{ApexError, ApexResult};
