//! UI Components

use std::time::Duration;

use leptos::prelude::*;

use checkout_core::{
    Amount, CheckoutState, Field, MockProcessorLoader, ResultView, render_form,
    simulate_payment,
};

use crate::timer::TimeoutDelay;

/// Card details form with the simulated submit
#[component]
pub fn CardForm(
    amount: Amount,
    loader: MockProcessorLoader,
    settle_after: Duration,
    state: RwSignal<CheckoutState>,
) -> impl IntoView {
    let view_model =
        Memo::new(move |_| state.with(|s| render_form(s.form().fields(), &amount)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(CheckoutState::begin).unwrap_or(false) {
            return;
        }

        let loader = loader.clone();
        leptos::task::spawn_local(async move {
            let outcome = simulate_payment(&loader, &TimeoutDelay, settle_after).await;
            state.update(|s| {
                s.settle(outcome);
            });
        });
    };

    view! {
        <div class="card-form">
            <h2>"Secure Payment"</h2>
            <p class="subtitle">"Complete your purchase securely"</p>

            <div class="amount">
                <span>"Amount to Pay"</span>
                <span class="value">{move || view_model.with(|v| v.amount_label.clone())}</span>
            </div>

            <form on:submit=on_submit>
                <CardInput field=Field::CardNumber state=state />
                <div class="row">
                    <CardInput field=Field::Expiry state=state />
                    <CardInput field=Field::Cvc state=state />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || view_model.with(|v| v.submit_disabled)
                >
                    {move || view_model.with(|v| v.submit_label)}
                </button>
            </form>

            <p class="secured">"Secured by industry-leading encryption"</p>
        </div>
    }
}

/// One formatted card input
#[component]
pub fn CardInput(field: Field, state: RwSignal<CheckoutState>) -> impl IntoView {
    view! {
        <div class="field">
            <label>{field.label()}</label>
            <input
                type="text"
                placeholder=field.placeholder()
                maxlength=field.max_len().to_string()
                required=true
                prop:value=move || state.with(|s| s.form().fields().value(field).to_string())
                on:input=move |ev| state.update(|s| s.input(field, &event_target_value(&ev)))
            />
        </div>
    }
}

/// Success or failure panel with its way back to the form
#[component]
pub fn ResultPanel(panel: ResultView, on_action: Callback<()>) -> impl IntoView {
    let class = if panel.success {
        "result result-success"
    } else {
        "result result-error"
    };

    view! {
        <div class=class>
            <h2>{panel.title}</h2>
            <p>{panel.body}</p>
            <button class="btn" on:click=move |_| on_action.run(())>
                {panel.action_label}
            </button>
        </div>
    }
}
