pub mod json_backend;

use crate::errors::QuoteError;
use crate::quote::QuoteMetadata;

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Abstraction over key-value persistence for generated quotes.
///
/// Each quote is written exactly once under its own key; the wizard itself
/// never reads back, so `load` and `list` exist for tooling and tests.
pub trait QuoteStore: Send + Sync {
    fn save(&self, quote: &QuoteMetadata) -> Result<()>;
    fn load(&self, quote_id: &str) -> Result<QuoteMetadata>;
    fn list(&self) -> Result<Vec<String>>;
}

pub use json_backend::JsonQuoteStore;
