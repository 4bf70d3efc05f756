//! Error types for the Apex applications API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApexError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),
}

impl ApexError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

pub type ApexResult<T> = Result<T, ApexError>;
