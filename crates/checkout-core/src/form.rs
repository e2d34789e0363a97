//! Payment Form State
//!
//! Card field values plus the submission guard.

use serde::{Deserialize, Serialize};

use crate::format::{
    CARD_NUMBER_MAX_LEN, CVC_MAX_LEN, EXPIRY_MAX_LEN, format_card_number, format_cvc,
    format_expiry,
};
use crate::status::PaymentOutcome;

/// One of the three card inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CardNumber,
    Expiry,
    Cvc,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::CardNumber, Self::Expiry, Self::Cvc];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CardNumber => "Card Number",
            Self::Expiry => "Expiry Date",
            Self::Cvc => "CVC",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::CardNumber => "1234 5678 9012 3456",
            Self::Expiry => "MM/YY",
            Self::Cvc => "123",
        }
    }

    /// Character cap of the input control
    pub fn max_len(&self) -> usize {
        match self {
            Self::CardNumber => CARD_NUMBER_MAX_LEN,
            Self::Expiry => EXPIRY_MAX_LEN,
            Self::Cvc => CVC_MAX_LEN,
        }
    }

    pub fn format(&self, raw: &str) -> String {
        match self {
            Self::CardNumber => format_card_number(raw),
            Self::Expiry => format_expiry(raw),
            Self::Cvc => format_cvc(raw),
        }
    }
}

/// Submission lifecycle of a single form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Processing,
    Resolved,
}

/// Values held by the form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub processing: bool,
}

impl FormFields {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::Expiry => &self.expiry,
            Field::Cvc => &self.cvc,
        }
    }

    /// Store a keystroke's worth of input.
    ///
    /// The raw text goes through the field's formatter; the stored value is
    /// then capped at the control's max length.
    pub fn input(&mut self, field: Field, raw: &str) {
        let stored: String = field.format(raw).chars().take(field.max_len()).collect();
        match field {
            Field::CardNumber => self.card_number = stored,
            Field::Expiry => self.expiry = stored,
            Field::Cvc => self.cvc = stored,
        }
    }

    /// Empty the three inputs; leaves `processing` alone
    pub fn clear_inputs(&mut self) {
        self.card_number.clear();
        self.expiry.clear();
        self.cvc.clear();
    }
}

/// Form fields and the single in-flight guard
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentForm {
    fields: FormFields,
    state: SubmissionState,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_processing(&self) -> bool {
        self.fields.processing
    }

    pub fn input(&mut self, field: Field, raw: &str) {
        self.fields.input(field, raw);
    }

    pub fn clear_inputs(&mut self) {
        self.fields.clear_inputs();
    }

    /// Enter `Processing`.
    ///
    /// Returns `false` and changes nothing when an attempt is already in
    /// flight.
    pub fn begin(&mut self) -> bool {
        if self.fields.processing {
            tracing::warn!("submission refused: payment already processing");
            return false;
        }
        self.state = SubmissionState::Processing;
        self.fields.processing = true;
        tracing::info!("payment submission started");
        true
    }

    /// Leave `Processing` and pass the outcome through
    pub fn resolve(&mut self, outcome: PaymentOutcome) -> PaymentOutcome {
        self.state = SubmissionState::Resolved;
        self.fields.processing = false;
        tracing::info!(success = outcome.is_success(), "payment submission resolved");
        outcome
    }
}
