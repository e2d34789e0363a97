//! Payment Submission Simulator
//!
//! Stands in for a gateway round trip: check the processor precondition,
//! wait out the settle delay, then report success. The timer path never
//! fails; the only failure is a missing processor, detected before the
//! delay starts.

use std::time::Duration;

use crate::delay::Delay;
use crate::processor::{ProcessorLoader, require_processor};
use crate::status::PaymentOutcome;

/// Simulate one payment attempt
pub async fn simulate_payment(
    loader: &dyn ProcessorLoader,
    delay: &dyn Delay,
    settle_after: Duration,
) -> PaymentOutcome {
    match require_processor(loader).await {
        Ok(handle) => {
            tracing::debug!(key = handle.publishable_key(), "processor ready");
            delay.sleep(settle_after).await;
            PaymentOutcome::Success
        }
        Err(e) => {
            tracing::warn!("payment precondition failed: {}", e);
            e.into()
        }
    }
}
