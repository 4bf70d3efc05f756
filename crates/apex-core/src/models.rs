//! Domain models for the Apex applications API.

pub mod application;
