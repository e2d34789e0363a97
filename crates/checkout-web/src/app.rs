//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use checkout_core::CheckoutConfig;

use crate::pages::CheckoutPage;

/// Page settings, with the publishable key overridable at build time
pub fn checkout_config() -> CheckoutConfig {
    let config = CheckoutConfig::default();
    match option_env!("STRIPE_PUBLISHABLE_KEY") {
        Some(key) if !key.is_empty() => config.with_publishable_key(key),
        _ => config,
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=CheckoutPage />
                </Routes>
            </main>
        </Router>
    }
}
