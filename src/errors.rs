use thiserror::Error;

/// Error type covering the failures a quote session can surface.
///
/// Field-level validation failures are deliberately not represented here:
/// they travel as [`crate::validation::ValidationErrors`] maps and are
/// recovered at the step boundary without ever becoming a `QuoteError`.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<dialoguer::Error> for QuoteError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) => QuoteError::Io(io),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
