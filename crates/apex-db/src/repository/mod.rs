//! SurrealDB repository implementations.

mod application;
mod probe;

pub use application::SurrealApplicationRepository;
pub use probe::SurrealDatabaseProbe;
