//! Email capture before checkout

use leptos::prelude::*;
use nest_payments::validate_email;

#[component]
pub fn EmailDialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let value = email.get();
        match validate_email(&value) {
            Ok(()) => on_submit.run(value),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <div class="dialog-header">
                        <h2>"✉ Enter Your Email"</h2>
                        <button class="close" on:click=move |_| on_close.run(())>"✕"</button>
                    </div>

                    <form on:submit=submit>
                        <label for="email">"Email Address"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="your.email@example.com"
                            autofocus=true
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                        />
                        {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}

                        <div class="notice">
                            "Your email is required to process your payment and send you access details."
                        </div>

                        <div class="dialog-actions">
                            <button type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                            <button type="submit" class="btn btn-primary">"Continue to Payment"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
