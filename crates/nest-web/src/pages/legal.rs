//! Legal Pages

use leptos::prelude::*;
use nest_core::content::{LegalPage, SUPPORT_EMAIL};

#[component]
fn LegalDocument(page: LegalPage) -> impl IntoView {
    let sections = page
        .sections()
        .iter()
        .map(|section| {
            let bullets = (!section.bullets.is_empty()).then(|| {
                view! {
                    <ul>
                        {section.bullets.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
                    </ul>
                }
            });
            view! {
                <h2>{section.heading}</h2>
                {section.paragraph.map(|text| view! { <p>{text}</p> })}
                {bullets}
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="legal">
            <h1>{page.title()}</h1>
            <p>{page.intro()}</p>
            {sections}
            <p class="legal-contact">
                <a href=format!("mailto:{SUPPORT_EMAIL}")>{SUPPORT_EMAIL}</a>
            </p>
            <a href="/" class="btn">"Back to home"</a>
        </article>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! { <LegalDocument page=LegalPage::PrivacyPolicy /> }
}

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! { <LegalDocument page=LegalPage::TermsOfService /> }
}

#[component]
pub fn RefundPolicyPage() -> impl IntoView {
    view! { <LegalDocument page=LegalPage::RefundPolicy /> }
}
