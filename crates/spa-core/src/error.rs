//! Ledger Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors from catalog lookups and ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Service id not present in the catalog
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// Storage error
    #[error("storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            LedgerError::UnknownService(_) => "Unknown service package.",
            LedgerError::Storage(_) => "An error occurred processing your request.",
        }
    }
}
