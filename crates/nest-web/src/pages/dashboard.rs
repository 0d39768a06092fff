//! Dashboard Page
//!
//! The gated directory: filters, view-mode toggle and the listing itself.

use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use nest_core::{
    catalog::CITIES, Catalog, CityFilter, FilterOutcome, PriceRange, Property, PropertyFilter,
    ViewMode,
};

use crate::components::{MapView, PropertyCard};
use crate::storage::access_gate;

fn load_catalog() -> Vec<Property> {
    match Catalog::builtin() {
        Ok(catalog) => catalog.properties().to_vec(),
        Err(e) => {
            leptos::logging::error!("Failed to load listings: {e}");
            Vec::new()
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let properties = StoredValue::new(load_catalog());

    let (view_mode, set_view_mode) = signal(ViewMode::default());
    let (filter, set_filter) = signal(PropertyFilter::new());
    let (filters_open, set_filters_open) = signal(false);

    let filtered = Memo::new(move |_| {
        filter.with(|f| properties.with_value(|all| f.apply(all).into_iter().cloned().collect::<Vec<_>>()))
    });

    let navigate = use_navigate();
    let logout = move |_| {
        access_gate().clear();
        navigate(
            "/",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    let view_toggle = move || {
        ViewMode::ALL
            .into_iter()
            .map(|mode| {
                view! {
                    <button
                        class=move || if view_mode.get() == mode { "view-toggle active" } else { "view-toggle" }
                        title=mode.title()
                        on:click=move |_| set_view_mode.set(mode)
                    >
                        {mode.as_str()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let city_options = std::iter::once(("all", "All Cities"))
        .chain(CITIES.iter().map(|city| (*city, *city)))
        .map(|(value, label)| view! { <option value=value>{label}</option> })
        .collect::<Vec<_>>();

    let price_options = PriceRange::ALL
        .iter()
        .map(|range| view! { <option value=range.as_str()>{range.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div class="brand">
                    "Diaspora" <span class="accent">"Nest"</span>
                    <span class="badge-premium">"Premium"</span>
                </div>
                <div class="header-actions">
                    <div class="view-toggles">{view_toggle}</div>
                    <button class="filters-toggle" on:click=move |_| set_filters_open.update(|o| *o = !*o)>
                        "Filters"
                    </button>
                    <button class="logout" on:click=logout>"Logout"</button>
                </div>
            </header>

            <div class=move || if filters_open.get() { "filters open" } else { "filters" }>
                <input
                    type="text"
                    placeholder="Search properties or locations..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        set_filter.update(|f| f.search = search);
                    }
                />
                <select
                    prop:value=move || filter.with(|f| f.city.value().to_string())
                    on:change=move |ev| {
                        let city = CityFilter::from_value(&event_target_value(&ev));
                        set_filter.update(|f| f.city = city);
                    }
                >
                    {city_options}
                </select>
                <select
                    prop:value=move || filter.with(|f| f.price.as_str())
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<PriceRange>() {
                            Ok(price) => set_filter.update(|f| f.price = price),
                            Err(e) => leptos::logging::warn!("{e}"),
                        }
                    }
                >
                    {price_options}
                </select>
                <Show when=move || filters_open.get()>
                    <button class="filters-close" on:click=move |_| set_filters_open.set(false)>
                        "✕ Close Filters"
                    </button>
                </Show>
            </div>

            <section class="listings">
                <h1>"Trusted Property Listings"</h1>
                <p class="summary">{move || FilterOutcome::new(filtered.with(Vec::len)).summary()}</p>

                <Show
                    when=move || view_mode.get().shows_cards()
                    fallback=move || view! { <MapView properties=filtered /> }
                >
                    <div class=move || view_mode.get().layout_class()>
                        <For
                            each=move || filtered.get()
                            key=|property| property.id.clone()
                            children=move |property| view! { <PropertyCard property=property view_mode=view_mode /> }
                        />
                    </div>
                </Show>

                <Show when=move || filtered.with(Vec::is_empty)>
                    <div class="empty-state">
                        <h3>"No properties found"</h3>
                        <p>"Try adjusting your search criteria or filters"</p>
                        <button class="btn btn-primary" on:click=move |_| set_filter.update(PropertyFilter::reset)>
                            "Clear All Filters"
                        </button>
                    </div>
                </Show>
            </section>
        </div>
    }
}
