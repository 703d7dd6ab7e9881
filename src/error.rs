use crate::services::validation::ValidationReport;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Programmer misuse of the editor contract, e.g. submitting an invalid
    /// draft or removing the last remaining question. Not user-facing.
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Field-path-keyed validation failures, user-correctable.
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    /// Non-success response from the quiz service, flattened to one message.
    #[error("Quiz service error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
