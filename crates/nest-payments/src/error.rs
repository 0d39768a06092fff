//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Provider answered with a non-success status
    #[error("Payment provider returned {status}: {body}")]
    Upstream {
        status: u16,
        /// Provider's error payload, passed back to the caller untouched
        body: serde_json::Value,
    },

    /// Could not reach the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered 2xx with something that is not JSON
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            PaymentError::Network(_) => true,
            PaymentError::Upstream { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Error payload to hand back to the browser.
    ///
    /// Upstream failures forward the provider body; everything else is the
    /// error message.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            PaymentError::Upstream { body, .. } => body.clone(),
            other => serde_json::Value::String(other.to_string()),
        }
    }
}
