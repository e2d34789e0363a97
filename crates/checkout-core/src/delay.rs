//! Delay Abstraction
//!
//! The simulated round trip waits through a [`Delay`] so hosts can pick the
//! timer: tokio on native, `setTimeout` in the browser, or nothing in tests.

use std::cell::RefCell;
use std::time::Duration;

use async_trait::async_trait;

/// Waits for a fixed duration
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

/// Tokio timer
#[cfg(feature = "tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[cfg(feature = "tokio")]
#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately and remembers every requested duration
#[derive(Debug, Default)]
pub struct InstantDelay {
    requested: RefCell<Vec<Duration>>,
}

impl InstantDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations passed to `sleep`, oldest first
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Delay for InstantDelay {
    async fn sleep(&self, duration: Duration) {
        self.requested.borrow_mut().push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_delay_records() {
        let delay = InstantDelay::new();
        delay.sleep(Duration::from_millis(2000)).await;
        delay.sleep(Duration::from_millis(5)).await;
        assert_eq!(
            delay.requested(),
            vec![Duration::from_millis(2000), Duration::from_millis(5)]
        );
    }

    #[cfg(feature = "tokio")]
    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_waits() {
        let start = tokio::time::Instant::now();
        TokioDelay.sleep(Duration::from_millis(2000)).await;
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }
}
