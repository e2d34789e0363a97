//! Checkout Configuration

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::{Amount, DEMO_AMOUNT};
use crate::error::Result;
use crate::form::PaymentForm;

/// Fixed simulated round trip.
pub const DEFAULT_SETTLE_AFTER_MS: u64 = 2000;

/// Placeholder key the demo loads the processor script with.
pub const DEFAULT_PUBLISHABLE_KEY: &str = "your_publishable_key";

/// What happens to the card fields when the user returns to the form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldResetPolicy {
    /// Start from empty fields, as a freshly mounted form does
    #[default]
    Clear,
    /// Keep whatever was typed before the attempt
    Preserve,
}

impl FieldResetPolicy {
    /// Apply the policy to a form being shown again
    pub fn apply(self, form: &mut PaymentForm) {
        if self == Self::Clear {
            form.clear_inputs();
        }
    }
}

/// Checkout page settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Amount shown on the form
    pub amount: Amount,

    /// Simulated processing time in milliseconds
    pub settle_after_ms: u64,

    /// Key handed to the processor loader
    pub publishable_key: String,

    /// Field handling on reset
    pub field_reset: FieldResetPolicy,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            amount: Amount::default(),
            settle_after_ms: DEFAULT_SETTLE_AFTER_MS,
            publishable_key: DEFAULT_PUBLISHABLE_KEY.into(),
            field_reset: FieldResetPolicy::default(),
        }
    }
}

/// Wire shape of [`CheckoutConfig`] before the amount is validated
#[derive(Deserialize)]
#[serde(default)]
struct RawCheckoutConfig {
    amount: Decimal,
    settle_after_ms: u64,
    publishable_key: String,
    field_reset: FieldResetPolicy,
}

impl Default for RawCheckoutConfig {
    fn default() -> Self {
        Self {
            amount: DEMO_AMOUNT,
            settle_after_ms: DEFAULT_SETTLE_AFTER_MS,
            publishable_key: DEFAULT_PUBLISHABLE_KEY.into(),
            field_reset: FieldResetPolicy::default(),
        }
    }
}

impl CheckoutConfig {
    /// Parse from JSON; missing keys take their defaults.
    ///
    /// Malformed JSON is a `Config` error, a non-positive amount an
    /// `InvalidAmount` error.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCheckoutConfig = serde_json::from_str(json)?;
        Ok(Self {
            amount: Amount::new(raw.amount)?,
            settle_after_ms: raw.settle_after_ms,
            publishable_key: raw.publishable_key,
            field_reset: raw.field_reset,
        })
    }

    pub fn with_publishable_key(mut self, key: impl Into<String>) -> Self {
        self.publishable_key = key.into();
        self
    }

    pub fn settle_after(&self) -> Duration {
        Duration::from_millis(self.settle_after_ms)
    }
}
