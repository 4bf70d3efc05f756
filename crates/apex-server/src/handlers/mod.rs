//! Request handlers.

pub mod applications;
pub mod health;
