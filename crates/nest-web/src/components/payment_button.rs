//! "Get Access" button and checkout hand-off

use leptos::prelude::*;
use nest_core::format::format_naira;
use nest_payments::ACCESS_FEE_NAIRA;

use crate::api;
use crate::components::EmailDialog;
use crate::storage::stash_payment_email;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    White,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-pay btn-primary",
            ButtonVariant::White => "btn btn-pay btn-white",
        }
    }
}

#[component]
pub fn PaymentButton(
    /// Shared across every pay button on the page
    loading: RwSignal<bool>,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    let (show_dialog, set_show_dialog) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let fee = format_naira(ACCESS_FEE_NAIRA.into());

    let on_submit = Callback::new(move |email: String| {
        set_show_dialog.set(false);
        loading.set(true);
        set_error.set(None);

        if let Err(e) = stash_payment_email(&email) {
            leptos::logging::warn!("Could not stash payment email: {e}");
        }

        leptos::task::spawn_local(async move {
            match api::create_checkout_session(&email).await {
                Ok(url) => {
                    let redirected = web_sys::window()
                        .map(|w| w.location().set_href(&url).is_ok())
                        .unwrap_or(false);
                    if !redirected {
                        set_error.set(Some("Could not open the payment page.".into()));
                        loading.set(false);
                    }
                }
                Err(e) => {
                    leptos::logging::error!("Payment error: {e}");
                    set_error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    });

    view! {
        <button
            class=variant.class()
            disabled=move || loading.get()
            on:click=move |_| {
                set_error.set(None);
                set_show_dialog.set(true);
            }
        >
            {move || if loading.get() {
                "Processing Payment...".to_string()
            } else {
                format!("Get Access Now - {fee}")
            }}
        </button>

        {move || error.get().map(|message| view! { <div class="payment-error">{message}</div> })}

        <EmailDialog
            open=show_dialog
            on_close=Callback::new(move |()| set_show_dialog.set(false))
            on_submit=on_submit
        />
    }
}
