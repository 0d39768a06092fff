//! Payment Success Page
//!
//! Paystack sends the payer here with `?reference=…`. Record access and move
//! on to the dashboard; without a reference, go home.

use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use nest_payments::reference_from_query;

use crate::storage::{access_gate, take_payment_email};

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        let replace = NavigateOptions {
            replace: true,
            ..Default::default()
        };

        let Some(reference) = reference_from_query(&query) else {
            navigate("/", replace);
            return;
        };

        let email = take_payment_email();
        match access_gate().grant(&reference, &email) {
            Ok(_) => navigate("/dashboard", replace),
            Err(e) => {
                leptos::logging::error!("Failed to record access: {e}");
                navigate("/", replace);
            }
        }
    });

    view! {
        <div class="payment-success">
            <div class="card">
                <div class="check">"✔"</div>
                <h1>"Payment Successful!"</h1>
                <p>"Thank you for your payment. You now have premium access to DiasporaNest."</p>
                <div class="pulse">"Redirecting you to the dashboard..."</div>
            </div>
        </div>
    }
}
