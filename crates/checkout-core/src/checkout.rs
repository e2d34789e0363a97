//! Checkout Session
//!
//! One page's worth of state: the status controller and the payment form.
//! [`CheckoutState`] holds the transitions; [`Checkout`] adds the
//! collaborators a submission needs and runs it to completion.

use crate::config::{CheckoutConfig, FieldResetPolicy};
use crate::delay::Delay;
use crate::form::{Field, PaymentForm};
use crate::processor::ProcessorLoader;
use crate::render::{ResultView, Screen, render, render_result};
use crate::simulator::simulate_payment;
use crate::status::{PaymentOutcome, StatusController};

/// Status plus form, changed only through the methods below
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutState {
    status: StatusController,
    form: PaymentForm,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &StatusController {
        &self.status
    }

    pub fn form(&self) -> &PaymentForm {
        &self.form
    }

    pub fn input(&mut self, field: Field, raw: &str) {
        self.form.input(field, raw);
    }

    /// Start an attempt; `false` if one is already in flight
    pub fn begin(&mut self) -> bool {
        self.form.begin()
    }

    /// Finish an attempt: clear processing, then report the outcome
    pub fn settle(&mut self, outcome: PaymentOutcome) -> PaymentOutcome {
        let outcome = self.form.resolve(outcome);
        self.status.handle_outcome(outcome.clone());
        outcome
    }

    /// Back to the form, applying the field policy
    pub fn reset(&mut self, policy: FieldResetPolicy) {
        self.status.reset();
        policy.apply(&mut self.form);
    }

    /// Result panel, `None` while the form is showing
    pub fn result(&self) -> Option<ResultView> {
        render_result(self.status.status())
    }

    pub fn render(&self, config: &CheckoutConfig) -> Screen {
        render(self.status.status(), self.form.fields(), &config.amount)
    }
}

/// Headless checkout page
pub struct Checkout<L, D> {
    config: CheckoutConfig,
    state: CheckoutState,
    loader: L,
    delay: D,
}

impl<L: ProcessorLoader, D: Delay> Checkout<L, D> {
    pub fn new(config: CheckoutConfig, loader: L, delay: D) -> Self {
        Self {
            config,
            state: CheckoutState::new(),
            loader,
            delay,
        }
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn status(&self) -> &StatusController {
        self.state.status()
    }

    pub fn form(&self) -> &PaymentForm {
        self.state.form()
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn input(&mut self, field: Field, raw: &str) {
        self.state.input(field, raw);
    }

    /// Run one attempt to completion and update the status.
    ///
    /// Returns `None` if an attempt is already in flight.
    pub async fn submit(&mut self) -> Option<PaymentOutcome> {
        if !self.state.begin() {
            return None;
        }
        let outcome =
            simulate_payment(&self.loader, &self.delay, self.config.settle_after()).await;
        Some(self.state.settle(outcome))
    }

    /// Return to the form, applying the configured field policy
    pub fn reset(&mut self) {
        self.state.reset(self.config.field_reset);
    }

    pub fn render(&self) -> Screen {
        self.state.render(&self.config)
    }
}
