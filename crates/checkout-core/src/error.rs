//! Checkout Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Shown when a failed precondition carries no message of its own.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Payment failed";

/// Checkout-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The payment processor script did not initialize
    #[error("Payment processor unavailable: {0}")]
    ProcessorUnavailable(String),

    /// Amount is not a positive value
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// Message shown on the failure screen.
    ///
    /// A processor failure is surfaced verbatim; an empty message falls back
    /// to [`FALLBACK_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::ProcessorUnavailable(msg) if !msg.is_empty() => msg.clone(),
            Self::ProcessorUnavailable(_) => FALLBACK_FAILURE_MESSAGE.into(),
            Self::InvalidAmount(_) => "The payment amount is not valid.".into(),
            Self::Config(_) => "Checkout configuration error.".into(),
        }
    }
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
