//! Checkout Page

use leptos::prelude::*;

use checkout_core::{CheckoutState, MockProcessorLoader};

use crate::app::checkout_config;
use crate::components::{CardForm, ResultPanel};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let config = checkout_config();
    // loaded once per page, like the processor script
    let loader = MockProcessorLoader::available(config.publishable_key.clone());
    let amount = config.amount;
    let settle_after = config.settle_after();
    let field_reset = config.field_reset;

    let state = RwSignal::new(CheckoutState::new());
    // changes only on status transitions
    let result = Memo::new(move |_| state.with(CheckoutState::result));

    let on_reset = Callback::new(move |()| state.update(|s| s.reset(field_reset)));

    view! {
        <div class="checkout">
            {move || match result.get() {
                None => view! {
                    <CardForm
                        amount=amount
                        loader=loader.clone()
                        settle_after=settle_after
                        state=state
                    />
                }
                .into_any(),
                Some(panel) => view! { <ResultPanel panel=panel on_action=on_reset /> }.into_any(),
            }}
        </div>
    }
}
