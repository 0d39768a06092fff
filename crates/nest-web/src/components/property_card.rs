//! Property Card
//!
//! One listing in grid or list layout: image carousel, key stats and agent
//! contact actions.

use leptos::prelude::*;
use nest_core::{
    contact::{phone_link, whatsapp_link},
    format::{format_optional_naira, format_optional_usd},
    ImageCarousel, Property, ViewMode,
};

#[component]
pub fn PropertyCard(property: Property, #[prop(into)] view_mode: Signal<ViewMode>) -> impl IntoView {
    let (carousel, set_carousel) = signal(ImageCarousel::new(property.images.len()));
    let (image_loading, set_image_loading) = signal(true);
    let (show_description, set_show_description) = signal(false);

    let is_list = move || view_mode.get() == ViewMode::List;

    let images = property.images.clone();
    let image_src = move || {
        carousel
            .with(|c| c.current(&images).map(str::to_string))
            .unwrap_or_default()
    };

    let has_controls = carousel.get_untracked().has_controls();
    let stat = |value: Option<String>, suffix: &'static str| {
        value.map(|v| view! { <span class="stat">{format!("{v}{suffix}")}</span> })
    };

    let whatsapp = whatsapp_link(&property);
    let phone = phone_link(&property);
    let documents = property
        .documents
        .iter()
        .map(|doc| {
            view! {
                <a class="btn btn-doc" href=doc.clone() target="_blank" rel="noopener noreferrer">
                    "Documents"
                </a>
            }
        })
        .collect::<Vec<_>>();

    let description = property.description.clone();

    view! {
        <div class=move || if is_list() { "card card-list" } else { "card card-grid" }>
            <div class="card-media">
                <Show when=move || image_loading.get()>
                    <div class="image-loading">"Loading..."</div>
                </Show>
                <img
                    src=image_src
                    alt=property.title.clone()
                    on:load=move |_| set_image_loading.set(false)
                    on:error=move |_| set_image_loading.set(false)
                />

                {property.verified.then(|| view! { <div class="badge-verified">"🛡 Verified"</div> })}

                {has_controls.then(|| view! {
                    <div class="image-counter">{move || carousel.with(ImageCarousel::counter)}</div>
                    <button class="carousel-prev" on:click=move |_| set_carousel.update(|c| { c.prev(); })>
                        "‹"
                    </button>
                    <button class="carousel-next" on:click=move |_| set_carousel.update(|c| { c.next(); })>
                        "›"
                    </button>
                })}
            </div>

            <div class="card-body">
                <h3>{property.title.clone()}</h3>
                <div class="location">"📍 " {property.location.clone()}</div>
                <div class="price">
                    {format_optional_naira(property.price_naira)}
                    {format_optional_usd(property.price_usd).map(|usd| view! { <span class="price-usd">{usd}</span> })}
                </div>

                <div class="stats">
                    {stat(property.bedrooms.map(|n| n.to_string()), " beds")}
                    {stat(property.bathrooms.map(|n| n.to_string()), " baths")}
                    {stat(property.area.map(|a| a.normalize().to_string()), " m²")}
                </div>

                <Show when=is_list>
                    <button class="toggle-description" on:click=move |_| set_show_description.update(|s| *s = !*s)>
                        {move || if show_description.get() { "Hide Description" } else { "Show Description" }}
                    </button>
                    {
                        let description = description.clone();
                        move || show_description.get().then(|| view! { <p class="description">{description.clone()}</p> })
                    }
                </Show>

                <div class="actions">
                    {whatsapp.map(|href| view! {
                        <a class="btn btn-whatsapp" href=href target="_blank" rel="noopener noreferrer">
                            "WhatsApp Agent"
                        </a>
                    })}
                    {phone.map(|href| view! { <a class="btn btn-call" href=href>"Call Agent"</a> })}
                    {documents}
                </div>
            </div>
        </div>
    }
}
