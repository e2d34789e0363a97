//! Payment Processor Loading
//!
//! Stand-in for the third-party payment script the page loads on start.
//! The demo never tokenizes card data; the handle only has to exist before a
//! submission may proceed.

use async_trait::async_trait;

use crate::error::{CheckoutError, Result};

/// Message used when the loader finishes without a handle.
pub const PROCESSOR_MISSING_MESSAGE: &str = "Stripe failed to load";

/// Initialized processor client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessorHandle {
    publishable_key: String,
}

impl ProcessorHandle {
    pub fn new(publishable_key: impl Into<String>) -> Self {
        Self {
            publishable_key: publishable_key.into(),
        }
    }

    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }
}

/// Loads the processor client (Strategy pattern)
///
/// `Ok(None)` means the script loaded but produced nothing usable.
#[async_trait(?Send)]
pub trait ProcessorLoader {
    async fn load(&self) -> Result<Option<ProcessorHandle>>;
}

/// Run the submission precondition: a handle must be present.
pub async fn require_processor(loader: &dyn ProcessorLoader) -> Result<ProcessorHandle> {
    loader
        .load()
        .await?
        .ok_or_else(|| CheckoutError::ProcessorUnavailable(PROCESSOR_MISSING_MESSAGE.into()))
}

/// Mock loader for the demo and for tests
#[derive(Clone, Debug)]
pub enum MockProcessorLoader {
    /// Loads with the given publishable key
    Available(String),
    /// Loads but yields no client
    Missing,
    /// Loading fails with the given message
    Failing(String),
}

impl MockProcessorLoader {
    pub fn available(publishable_key: impl Into<String>) -> Self {
        Self::Available(publishable_key.into())
    }
}

#[async_trait(?Send)]
impl ProcessorLoader for MockProcessorLoader {
    async fn load(&self) -> Result<Option<ProcessorHandle>> {
        match self {
            Self::Available(key) => Ok(Some(ProcessorHandle::new(key.clone()))),
            Self::Missing => Ok(None),
            Self::Failing(msg) => Err(CheckoutError::ProcessorUnavailable(msg.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_available() {
        let loader = MockProcessorLoader::available("pk_test_123");
        let handle = require_processor(&loader).await.unwrap();
        assert_eq!(handle.publishable_key(), "pk_test_123");
    }

    #[tokio::test]
    async fn test_missing_handle() {
        let err = require_processor(&MockProcessorLoader::Missing)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), PROCESSOR_MISSING_MESSAGE);
    }

    #[tokio::test]
    async fn test_failing_keeps_message() {
        let loader = MockProcessorLoader::Failing("network down".into());
        let err = require_processor(&loader).await.unwrap_err();
        assert_eq!(err, CheckoutError::ProcessorUnavailable("network down".into()));
    }
}
