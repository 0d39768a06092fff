//! Domain Models
//!
//! Listings are hand-authored and immutable at runtime.
//! Prices use `rust_decimal`, never f64.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A verified property listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Stable identifier (e.g., "cosgrove-1")
    pub id: String,

    /// Listing headline
    pub title: String,

    /// Free-form location, usually "Area, City"
    pub location: String,

    /// Asking price in naira
    #[serde(default)]
    pub price_naira: Option<Decimal>,

    /// Asking price in US dollars
    #[serde(default)]
    pub price_usd: Option<Decimal>,

    /// Image URLs, first one is the cover
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub bedrooms: Option<u32>,

    #[serde(default)]
    pub bathrooms: Option<u32>,

    /// Floor area in square metres
    #[serde(default)]
    pub area: Option<Decimal>,

    pub description: String,

    pub agent: AgentContact,

    /// Links to title documents, surveys, etc.
    #[serde(default)]
    pub documents: Vec<String>,

    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    pub verified: bool,
}

/// Agent contact details shown on a listing
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentContact {
    pub name: String,

    /// Dialable number, any format the phone app accepts
    #[serde(default)]
    pub phone: Option<String>,

    /// WhatsApp number in international format without '+' (e.g., "2348012345678")
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// Geographic position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Google Maps search URL for this point
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.lat, self.lng
        )
    }

    /// Google Maps view centred here at `zoom`
    pub fn map_view_url(&self, zoom: u8) -> String {
        format!(
            "https://www.google.com/maps/@?api=1&map_action=map&center={},{}&zoom={zoom}",
            self.lat, self.lng
        )
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal listing for tests
    pub fn property(id: &str, title: &str, location: &str, price: Option<Decimal>) -> Property {
        Property {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            price_naira: price,
            price_usd: None,
            images: vec![format!("https://img.example/{id}.jpg")],
            bedrooms: Some(3),
            bathrooms: Some(2),
            area: None,
            description: format!("{title} in {location}"),
            agent: AgentContact {
                name: "Test Agent".into(),
                phone: Some("+2348000000000".into()),
                whatsapp: Some("2348000000000".into()),
            },
            documents: Vec::new(),
            coordinates: None,
            verified: true,
        }
    }
}
