//! Payment Status
//!
//! Screen state for the checkout page and the outcome type that drives it.

use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;

/// Which screen the page shows
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Card form
    #[default]
    Idle,
    /// Confirmation screen
    Success,
    /// Failure screen with the message to show
    Error { message: String },
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::Success => "success",
            Self::Error { .. } => "error",
        }
    }

    /// Stored error message, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Result of one simulated payment attempt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum PaymentOutcome {
    Success,
    Error { message: String },
}

impl PaymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<CheckoutError> for PaymentOutcome {
    fn from(err: CheckoutError) -> Self {
        Self::Error {
            message: err.user_message(),
        }
    }
}

/// Owns the current [`PaymentStatus`].
///
/// All mutation goes through the named transitions below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusController {
    status: PaymentStatus,
}

impl StatusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &PaymentStatus {
        &self.status
    }

    pub fn report_success(&mut self) {
        tracing::debug!(from = self.status.as_str(), "status -> success");
        self.status = PaymentStatus::Success;
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(from = self.status.as_str(), %message, "status -> error");
        self.status = PaymentStatus::Error { message };
    }

    /// Back to the form; drops any stored error message
    pub fn reset(&mut self) {
        tracing::debug!(from = self.status.as_str(), "status -> idle");
        self.status = PaymentStatus::Idle;
    }

    /// Route a finished attempt to the matching transition
    pub fn handle_outcome(&mut self, outcome: PaymentOutcome) {
        match outcome {
            PaymentOutcome::Success => self.report_success(),
            PaymentOutcome::Error { message } => self.report_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let controller = StatusController::new();
        assert_eq!(controller.status(), &PaymentStatus::Idle);
        assert_eq!(controller.status().error_message(), None);
    }

    #[test]
    fn test_error_then_reset_clears_message() {
        let mut controller = StatusController::new();
        controller.report_error("Card declined");
        assert_eq!(controller.status().error_message(), Some("Card declined"));

        controller.reset();
        assert_eq!(controller.status(), &PaymentStatus::Idle);
        assert_eq!(controller.status().error_message(), None);
    }

    #[test]
    fn test_handle_outcome() {
        let mut controller = StatusController::new();
        controller.handle_outcome(PaymentOutcome::Success);
        assert_eq!(controller.status(), &PaymentStatus::Success);

        controller.handle_outcome(CheckoutError::ProcessorUnavailable(String::new()).into());
        assert_eq!(controller.status().error_message(), Some("Payment failed"));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(PaymentStatus::Error {
            message: "nope".into(),
        })
        .unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "nope");
    }
}
