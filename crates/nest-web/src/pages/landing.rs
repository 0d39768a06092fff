//! Landing Page

use leptos::prelude::*;
use nest_core::{
    contact::team_whatsapp_link,
    content::{LegalPage, FAQS, FEATURES, PRICING_POINTS, SUPPORT_EMAIL, TESTIMONIALS},
    format::format_naira,
};
use nest_payments::ACCESS_FEE_NAIRA;

use crate::components::{ButtonVariant, PaymentButton};

#[component]
pub fn LandingPage() -> impl IntoView {
    let loading = RwSignal::new(false);
    let (menu_open, set_menu_open) = signal(false);

    let fee = format_naira(ACCESS_FEE_NAIRA.into());

    let nav_links = || {
        view! {
            <a href="#features">"Features"</a>
            <a href="#testimonials">"Testimonials"</a>
            <a href="#pricing">"Pricing"</a>
            <a href="#faq">"FAQ"</a>
        }
    };

    let features = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="feature">
                    <div class="feature-icon">{feature.icon}</div>
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let testimonials = TESTIMONIALS
        .iter()
        .map(|t| {
            let stars = "★".repeat(usize::from(t.rating));
            let avatar = match t.photo {
                Some(photo) => view! { <img class="avatar" src=photo alt=t.name loading="lazy" /> }.into_any(),
                None => view! { <div class="avatar avatar-initials">{t.avatar}</div> }.into_any(),
            };
            view! {
                <div class="testimonial">
                    <div class="stars">{stars}</div>
                    <p class="quote">"\u{201C}" {t.text} "\u{201D}"</p>
                    <div class="author">
                        {avatar}
                        <div>
                            <div class="name">{t.name}</div>
                            <div class="from">{t.location}</div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let faqs = FAQS
        .iter()
        .map(|faq| {
            view! {
                <div class="faq">
                    <h3>{faq.question}</h3>
                    <p>{faq.answer}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let pricing_points = PRICING_POINTS
        .iter()
        .map(|point| view! { <li>"✓ " {*point}</li> })
        .collect::<Vec<_>>();

    let legal_links = LegalPage::ALL
        .iter()
        .map(|page| view! { <li><a href=page.path()>{page.title()}</a></li> })
        .collect::<Vec<_>>();

    view! {
        <div class="landing">
            <header class="site-header">
                <div class="brand">"Diaspora" <span class="accent">"Nest"</span></div>
                <nav class="desktop-nav">{nav_links()}</nav>
                <button class="menu-toggle" on:click=move |_| set_menu_open.update(|o| *o = !*o)>
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <Show when=move || menu_open.get()>
                    <nav class="mobile-nav" on:click=move |_| set_menu_open.set(false)>
                        {nav_links()}
                    </nav>
                </Show>
            </header>

            <section class="hero">
                <h1>"Invest in Nigeria's " <span class="accent">"Real Estate"</span> " from Anywhere"</h1>
                <p class="tagline">
                    "Exclusive access to verified properties for Nigerians and Africans in the diaspora. "
                    "Connect with trusted agents and secure your real estate investments back home."
                </p>
                <div class="cta">
                    <PaymentButton loading=loading />
                    <span class="fee-note">{format!("One-time fee of {fee}")}</span>
                </div>
            </section>

            <section class="trust">
                <div class="trust-item"><strong>"500+"</strong>" Verified Properties"</div>
                <div class="trust-item"><strong>"100+"</strong>" Trusted Agents"</div>
                <div class="trust-item"><strong>"24/7"</strong>" WhatsApp Support"</div>
                <div class="trust-item"><strong>"7-day"</strong>" Money-back Guarantee"</div>
            </section>

            <section id="features" class="features">
                <h2>"Why Choose DiasporaNest?"</h2>
                <p class="subtitle">
                    "We provide the most comprehensive and secure platform for diaspora real estate investment"
                </p>
                <div class="feature-grid">{features}</div>
            </section>

            <section id="testimonials" class="testimonials">
                <h2>"What Our Clients Say"</h2>
                <p class="subtitle">"Join thousands of satisfied investors who trust DiasporaNest"</p>
                <div class="testimonial-grid">{testimonials}</div>
            </section>

            <section id="pricing" class="pricing">
                <h2>"Premium Access Pricing"</h2>
                <p class="subtitle">"One-time payment for access to our verified property listings"</p>
                <div class="plan featured">
                    <div class="price">{fee.clone()}</div>
                    <ul>{pricing_points}</ul>
                    <PaymentButton loading=loading variant=ButtonVariant::White />
                </div>
            </section>

            <section id="faq" class="faqs">
                <h2>"Frequently Asked Questions"</h2>
                <p class="subtitle">"Everything you need to know about DiasporaNest"</p>
                {faqs}
            </section>

            <footer class="site-footer">
                <div>
                    <div class="brand">"Diaspora" <span class="accent">"Nest"</span></div>
                    <p>
                        "Connecting Nigerians and Africans in the diaspora with verified real estate "
                        "opportunities back home. Your trusted partner in property investment."
                    </p>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <a href=format!("mailto:{SUPPORT_EMAIL}")>{SUPPORT_EMAIL}</a>
                </div>
                <div>
                    <h4>"Legal"</h4>
                    <ul>{legal_links}</ul>
                </div>
                <p class="copyright">"© 2025 DiasporaNest. All rights reserved."</p>
            </footer>

            <a
                class="whatsapp-float"
                href=team_whatsapp_link()
                target="_blank"
                rel="noopener noreferrer"
                title="Chat with DiasporaNest Team on WhatsApp"
            >
                <img
                    src="https://res.cloudinary.com/dc5qncppu/image/upload/v1750604435/whaticon_i3kmux.png"
                    alt="WhatsApp"
                />
            </a>
        </div>
    }
}
