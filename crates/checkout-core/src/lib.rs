//! # checkout-core
//!
//! Logic behind the demo checkout page: card input formatting, the payment
//! status screens, and a simulated submission.
//!
//! ## Flow
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ keystroke  │──▶│  formatter  │──▶│ PaymentForm  │──▶│ simulate_payment │
//! └────────────┘   └─────────────┘   └──────────────┘   └────────┬─────────┘
//!                                                                │ PaymentOutcome
//!                  ┌─────────────┐   ┌──────────────────┐        │
//!                  │   render    │◀──│ StatusController │◀───────┘
//!                  └─────────────┘   └──────────────────┘
//! ```
//!
//! No card data leaves the page. The processor loader and the delay are
//! traits so the browser, native hosts and tests can each plug in their own.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::{Checkout, CheckoutConfig, Field, MockProcessorLoader, TokioDelay};
//!
//! let config = CheckoutConfig::default();
//! let loader = MockProcessorLoader::available(config.publishable_key.clone());
//! let mut checkout = Checkout::new(config, loader, TokioDelay);
//!
//! checkout.input(Field::CardNumber, "4242424242424242");
//! checkout.submit().await;
//! ```

pub mod amount;
pub mod checkout;
pub mod config;
pub mod delay;
pub mod error;
pub mod form;
pub mod format;
pub mod processor;
pub mod render;
pub mod simulator;
pub mod status;

pub use amount::Amount;
pub use checkout::{Checkout, CheckoutState};
pub use config::{CheckoutConfig, FieldResetPolicy};
#[cfg(feature = "tokio")]
pub use delay::TokioDelay;
pub use delay::{Delay, InstantDelay};
pub use error::{CheckoutError, Result};
pub use form::{Field, FormFields, PaymentForm, SubmissionState};
pub use format::{format_card_number, format_cvc, format_expiry};
pub use processor::{MockProcessorLoader, ProcessorHandle, ProcessorLoader};
pub use render::{FieldView, FormView, ResultView, Screen, render, render_form, render_result};
pub use simulator::simulate_payment;
pub use status::{PaymentOutcome, PaymentStatus, StatusController};
