//! Application State

use std::sync::Arc;

use checkout_core::CheckoutConfig;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// Default checkout settings (amount, settle delay) reported by `/health`
    pub checkout: Arc<CheckoutConfig>,
}
