//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{
    DashboardPage, LandingPage, PaymentSuccessPage, PrivacyPolicyPage, RefundPolicyPage,
    TermsOfServicePage,
};
use crate::storage::access_gate;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/dashboard") view=GatedDashboard />
                    <Route path=path!("/payment-success") view=PaymentSuccessPage />
                    <Route path=path!("/privacy-policy") view=PrivacyPolicyPage />
                    <Route path=path!("/terms-of-service") view=TermsOfServicePage />
                    <Route path=path!("/refund-policy") view=RefundPolicyPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Dashboard behind the access gate; everyone else goes home
#[component]
fn GatedDashboard() -> impl IntoView {
    let allowed = access_gate().has_valid_access();

    view! {
        <Show when=move || allowed fallback=|| view! { <Redirect path="/" /> }>
            <DashboardPage />
        </Show>
    }
}
