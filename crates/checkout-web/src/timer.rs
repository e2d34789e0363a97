//! Browser Timer

use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::set_timeout;

use checkout_core::Delay;

/// [`Delay`] backed by `window.setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutDelay;

#[async_trait(?Send)]
impl Delay for TimeoutDelay {
    async fn sleep(&self, duration: Duration) {
        let (tx, rx) = oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        // a dropped sender only happens if the page is torn down
        let _ = rx.await;
    }
}
