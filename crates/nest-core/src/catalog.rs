//! Built-in Property Catalog
//!
//! The listings ship inside the binary. Both the server and the WASM client
//! read the same document.

use crate::error::{NestError, Result};
use crate::model::{Coordinates, Property};

const BUILTIN_CATALOG: &str = include_str!("../data/properties.json");

/// Cities offered in the dashboard's city filter
pub const CITIES: [&str; 5] = ["Lagos", "Abuja", "Port Harcourt", "Ibadan", "Kano"];

/// Map centre used before any marker is placed
pub const MAP_CENTER: Coordinates = Coordinates::new(9.0765, 7.3986);

/// Zoom level for `MAP_CENTER`
pub const MAP_DEFAULT_ZOOM: u8 = 6;

/// Read-only collection of listings
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Parse the catalog compiled into this crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON array of listings
    pub fn from_json(json: &str) -> Result<Self> {
        let properties: Vec<Property> = serde_json::from_str(json)?;

        let mut seen = std::collections::HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                return Err(NestError::Catalog(format!(
                    "duplicate property id '{}'",
                    property.id
                )));
            }
        }

        tracing::debug!(count = properties.len(), "Loaded property catalog");
        Ok(Self { properties })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.properties().iter().all(|p| p.verified));
        assert!(catalog.properties().iter().all(|p| !p.images.is_empty()));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let cosgrove = catalog.get("cosgrove-1").unwrap();
        assert_eq!(cosgrove.title, "COSGROVE PROPERTIES");
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "a", "title": "A", "location": "Lagos", "description": "", "agent": {"name": "A"}, "verified": true},
            {"id": "a", "title": "B", "location": "Kano", "description": "", "agent": {"name": "B"}, "verified": true}
        ]"#;
        assert!(matches!(Catalog::from_json(json), Err(NestError::Catalog(_))));
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(NestError::Serialization(_))
        ));
    }
}
