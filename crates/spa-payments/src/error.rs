//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Service id not present in the catalog
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// Any failure from the payment provider (network, validation, auth)
    #[error("provider error: {0}")]
    Provider(String),

    /// Webhook signature verification failed
    #[error("webhook signature invalid: {0}")]
    WebhookSignature(String),

    /// Webhook payload parsing failed
    #[error("webhook parse error: {0}")]
    WebhookParse(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage error
    #[error("storage error: {0}")]
    Storage(String),
}

impl PaymentError {
    /// Get user-friendly message; provider detail never leaks here
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::UnknownService(_) => "Unknown service package.",
            PaymentError::Provider(_) => "Payment processing failed. Please try again.",
            PaymentError::WebhookSignature(_) | PaymentError::WebhookParse(_) => {
                "Webhook processing failed."
            }
            PaymentError::Config(_) => "Service configuration error.",
            PaymentError::Storage(_) => "An error occurred processing your request.",
        }
    }
}
