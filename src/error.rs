//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API key missing.")]
    MissingApiKey,

    #[error("Prompt missing.")]
    MissingPrompt,

    #[error("File name missing.")]
    MissingFileName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Invalid inline payload: {0}")]
    InvalidPayload(String),

    #[error("Input error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// True for failures detected before any remote call is attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingApiKey | Error::MissingPrompt | Error::MissingFileName
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
