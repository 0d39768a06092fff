//! Map View
//!
//! Marker list for listings with coordinates, each linking out to Google
//! Maps. The embedded map widget is not rendered here.

use leptos::prelude::*;
use nest_core::{
    catalog::{MAP_CENTER, MAP_DEFAULT_ZOOM},
    format::format_optional_naira,
    FilterOutcome, Property,
};

#[component]
pub fn MapView(#[prop(into)] properties: Signal<Vec<Property>>) -> impl IntoView {
    let heading = move || {
        let outcome = FilterOutcome::new(properties.with(Vec::len));
        format!("{} {} displayed on map", outcome.count, outcome.noun())
    };

    let markers = move || {
        properties.with(|all| {
            all.iter()
                .filter_map(|p| p.coordinates.map(|point| (p.clone(), point)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="map-view">
            <div class="map-header">
                <h3>"📍 Property Locations"</h3>
                <p>{heading}</p>
            </div>

            <div class="map-markers">
                {move || {
                    let markers = markers();
                    if markers.is_empty() {
                        view! {
                            <div class="map-empty">
                                <p>"No listings have map coordinates yet."</p>
                                <a href=MAP_CENTER.map_view_url(MAP_DEFAULT_ZOOM) target="_blank" rel="noopener noreferrer">
                                    "Browse the map of Nigeria"
                                </a>
                            </div>
                        }
                        .into_any()
                    } else {
                        markers
                            .into_iter()
                            .map(|(property, point)| view! {
                                <div class="map-marker">
                                    <h4>{property.title.clone()}</h4>
                                    <p class="location">{property.location.clone()}</p>
                                    <p class="price">{format_optional_naira(property.price_naira)}</p>
                                    <a href=point.maps_url() target="_blank" rel="noopener noreferrer">
                                        "Open in Google Maps"
                                    </a>
                                </div>
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
