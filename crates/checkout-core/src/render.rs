//! Screen Rendering
//!
//! Maps checkout state to what the page shows. Pure: no signals, no DOM.

use serde::Serialize;

use crate::amount::Amount;
use crate::form::{Field, FormFields};
use crate::status::PaymentStatus;

pub const PAY_LABEL: &str = "Pay Now";
pub const PROCESSING_LABEL: &str = "Processing...";

pub const SUCCESS_TITLE: &str = "Payment Successful!";
pub const SUCCESS_BODY: &str =
    "Thank you for your payment. Your transaction has been completed successfully.";
pub const SUCCESS_ACTION: &str = "Make Another Payment";

pub const FAILURE_TITLE: &str = "Payment Failed";
pub const FAILURE_ACTION: &str = "Try Again";

/// One card input as displayed
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub max_len: usize,
    pub value: String,
}

/// The card form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub amount_label: String,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
}

/// Success or failure panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub success: bool,
    pub title: &'static str,
    pub body: String,
    pub action_label: &'static str,
}

/// Everything the page can show
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum Screen {
    Form(FormView),
    Success(ResultView),
    Failure(ResultView),
}

pub fn render_form(fields: &FormFields, amount: &Amount) -> FormView {
    FormView {
        amount_label: amount.label(),
        fields: Field::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                max_len: field.max_len(),
                value: fields.value(field).to_string(),
            })
            .collect(),
        submit_label: if fields.processing {
            PROCESSING_LABEL
        } else {
            PAY_LABEL
        },
        submit_disabled: fields.processing,
    }
}

/// Panel for a finished attempt; `None` while the form is showing
pub fn render_result(status: &PaymentStatus) -> Option<ResultView> {
    match status {
        PaymentStatus::Idle => None,
        PaymentStatus::Success => Some(ResultView {
            success: true,
            title: SUCCESS_TITLE,
            body: SUCCESS_BODY.into(),
            action_label: SUCCESS_ACTION,
        }),
        PaymentStatus::Error { message } => Some(ResultView {
            success: false,
            title: FAILURE_TITLE,
            body: message.clone(),
            action_label: FAILURE_ACTION,
        }),
    }
}

/// Pick and fill the screen for the current status
pub fn render(status: &PaymentStatus, fields: &FormFields, amount: &Amount) -> Screen {
    match render_result(status) {
        None => Screen::Form(render_form(fields, amount)),
        Some(panel) if panel.success => Screen::Success(panel),
        Some(panel) => Screen::Failure(panel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_form() {
        let fields = FormFields {
            card_number: "4242 4242".into(),
            ..Default::default()
        };
        let Screen::Form(view) = render(&PaymentStatus::Idle, &fields, &Amount::default()) else {
            panic!("expected form screen");
        };
        assert_eq!(view.amount_label, "$99.99");
        assert_eq!(view.submit_label, PAY_LABEL);
        assert!(!view.submit_disabled);
        assert_eq!(view.fields[0].value, "4242 4242");
        assert_eq!(view.fields[0].max_len, 19);
        assert_eq!(view.fields[1].placeholder, "MM/YY");
    }

    #[test]
    fn test_processing_disables_submit() {
        let fields = FormFields {
            processing: true,
            ..Default::default()
        };
        let view = render_form(&fields, &Amount::default());
        assert_eq!(view.submit_label, PROCESSING_LABEL);
        assert!(view.submit_disabled);
    }

    #[test]
    fn test_failure_shows_message_verbatim() {
        let status = PaymentStatus::Error {
            message: "Stripe failed to load".into(),
        };
        let screen = render(&status, &FormFields::default(), &Amount::default());
        assert_eq!(
            screen,
            Screen::Failure(ResultView {
                success: false,
                title: FAILURE_TITLE,
                body: "Stripe failed to load".into(),
                action_label: FAILURE_ACTION,
            })
        );
    }

    #[test]
    fn test_success_screen() {
        let screen = render(
            &PaymentStatus::Success,
            &FormFields::default(),
            &Amount::default(),
        );
        let Screen::Success(view) = screen else {
            panic!("expected success screen");
        };
        assert_eq!(view.title, SUCCESS_TITLE);
        assert_eq!(view.action_label, SUCCESS_ACTION);
    }

    #[test]
    fn test_no_result_while_idle() {
        assert_eq!(render_result(&PaymentStatus::Idle), None);
        assert!(render_result(&PaymentStatus::Success).is_some_and(|p| p.success));
    }
}
