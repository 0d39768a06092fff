//! Directory Search & Filters
//!
//! Three predicates, all of which must hold:
//! free-text search over title and location, a city filter, and a naira
//! price bracket.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NestError;
use crate::model::Property;

const FIFTY_MILLION: Decimal = dec!(50000000);
const HUNDRED_MILLION: Decimal = dec!(100000000);
const TWO_HUNDRED_MILLION: Decimal = dec!(200000000);

/// Naira price bracket
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceRange {
    #[default]
    All,
    Under50M,
    From50To100M,
    From100To200M,
    Above200M,
}

impl PriceRange {
    pub const ALL: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::Under50M,
        PriceRange::From50To100M,
        PriceRange::From100To200M,
        PriceRange::Above200M,
    ];

    /// Value used in query strings and `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Under50M => "0-50",
            PriceRange::From50To100M => "50-100",
            PriceRange::From100To200M => "100-200",
            PriceRange::Above200M => "200+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => "All Prices",
            PriceRange::Under50M => "Under ₦50M",
            PriceRange::From50To100M => "₦50M - ₦100M",
            PriceRange::From100To200M => "₦100M - ₦200M",
            PriceRange::Above200M => "Above ₦200M",
        }
    }

    /// Unpriced listings only appear under `All`.
    pub fn contains(&self, price: Option<Decimal>) -> bool {
        let Some(price) = price else {
            return *self == PriceRange::All;
        };

        match self {
            PriceRange::All => true,
            PriceRange::Under50M => price < FIFTY_MILLION,
            PriceRange::From50To100M => (FIFTY_MILLION..=HUNDRED_MILLION).contains(&price),
            PriceRange::From100To200M => (HUNDRED_MILLION..=TWO_HUNDRED_MILLION).contains(&price),
            PriceRange::Above200M => price > TWO_HUNDRED_MILLION,
        }
    }
}

impl FromStr for PriceRange {
    type Err = NestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| NestError::UnknownPriceRange(s.to_string()))
    }
}

impl TryFrom<String> for PriceRange {
    type Error = NestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriceRange> for String {
    fn from(range: PriceRange) -> Self {
        range.as_str().to_string()
    }
}

/// City selection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CityFilter {
    #[default]
    All,
    City(String),
}

impl CityFilter {
    /// Parse a `<select>` value; "all" and "" both mean no filter
    pub fn from_value(value: &str) -> Self {
        match value {
            "" | "all" => CityFilter::All,
            city => CityFilter::City(city.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CityFilter::All => "all",
            CityFilter::City(city) => city,
        }
    }

    /// Substring match anywhere in the location, case-sensitive
    pub fn matches(&self, location: &str) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::City(city) => location.contains(city.as_str()),
        }
    }
}

/// Active dashboard filters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    pub search: String,
    pub city: CityFilter,
    pub price: PriceRange,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_city(mut self, city: CityFilter) -> Self {
        self.city = city;
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// Back to "everything"
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.matches_search(property)
            && self.city.matches(&property.location)
            && self.price.contains(property.price_naira)
    }

    fn matches_search(&self, property: &Property) -> bool {
        let term = self.search.to_lowercase();
        property.title.to_lowercase().contains(&term)
            || property.location.to_lowercase().contains(&term)
    }

    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Summary line for a filtered result set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub count: usize,
}

impl FilterOutcome {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Triggers the "No properties found" state
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn noun(&self) -> &'static str {
        if self.count == 1 { "property" } else { "properties" }
    }

    /// e.g. "3 verified properties available"
    pub fn summary(&self) -> String {
        format!("{} verified {} available", self.count, self.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::property;

    fn listings() -> Vec<Property> {
        vec![
            property("a", "Lekki Duplex", "Lekki Phase 1, Lagos", Some(dec!(45000000))),
            property("b", "Maitama Villa", "Maitama, Abuja", Some(dec!(150000000))),
            property("c", "GRA Bungalow", "GRA, Port Harcourt", Some(dec!(100000000))),
            property("d", "Banana Island Mansion", "Ikoyi, Lagos", Some(dec!(850000000))),
            property("e", "Unpriced Plot", "Bodija, Ibadan", None),
        ]
    }

    fn ids(found: &[&Property]) -> Vec<String> {
        found.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_default_filter_matches_all() {
        let listings = listings();
        let filter = PropertyFilter::new();
        assert!(filter.is_default());
        assert_eq!(filter.apply(&listings).len(), listings.len());
    }

    #[test]
    fn test_empty_directory_yields_empty_state() {
        let filter = PropertyFilter::new().with_search("lagos");
        let found = filter.apply(&[]);
        assert!(found.is_empty());

        let outcome = FilterOutcome::new(found.len());
        assert!(outcome.is_empty());
        assert_eq!(outcome.noun(), "properties");
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_location() {
        let listings = listings();

        let by_title = PropertyFilter::new().with_search("VILLA");
        assert_eq!(ids(&by_title.apply(&listings)), ["b"]);

        let by_location = PropertyFilter::new().with_search("ikoyi");
        assert_eq!(ids(&by_location.apply(&listings)), ["d"]);
    }

    #[test]
    fn test_city_matches_anywhere_in_location() {
        let listings = listings();
        let filter = PropertyFilter::new().with_city(CityFilter::from_value("Lagos"));
        assert_eq!(ids(&filter.apply(&listings)), ["a", "d"]);

        let mid = PropertyFilter::new().with_city(CityFilter::from_value("Harcourt"));
        assert_eq!(ids(&mid.apply(&listings)), ["c"]);
    }

    #[test]
    fn test_city_match_is_case_sensitive() {
        let listings = listings();
        let filter = PropertyFilter::new().with_city(CityFilter::from_value("lagos"));
        assert!(filter.apply(&listings).is_empty());
    }

    #[test]
    fn test_price_brackets() {
        let listings = listings();
        let by = |range| ids(&PropertyFilter::new().with_price(range).apply(&listings));

        assert_eq!(by(PriceRange::Under50M), ["a"]);
        assert_eq!(by(PriceRange::From50To100M), ["c"]);
        assert_eq!(by(PriceRange::From100To200M), ["b", "c"]);
        assert_eq!(by(PriceRange::Above200M), ["d"]);
    }

    #[test]
    fn test_bracket_edges() {
        assert!(PriceRange::From50To100M.contains(Some(dec!(50000000))));
        assert!(!PriceRange::Under50M.contains(Some(dec!(50000000))));
        assert!(PriceRange::From100To200M.contains(Some(dec!(200000000))));
        assert!(!PriceRange::Above200M.contains(Some(dec!(200000000))));
    }

    #[test]
    fn test_unpriced_only_under_all() {
        assert!(PriceRange::All.contains(None));
        for range in &PriceRange::ALL[1..] {
            assert!(!range.contains(None), "{range:?}");
        }
    }

    #[test]
    fn test_predicates_combine() {
        let listings = listings();
        let filter = PropertyFilter::new()
            .with_search("lagos")
            .with_city(CityFilter::from_value("Lagos"))
            .with_price(PriceRange::Above200M);
        assert_eq!(ids(&filter.apply(&listings)), ["d"]);
    }

    #[test]
    fn test_reset() {
        let mut filter = PropertyFilter::new()
            .with_search("x")
            .with_price(PriceRange::Under50M);
        assert!(!filter.is_default());
        filter.reset();
        assert!(filter.is_default());
    }

    #[test]
    fn test_price_range_parsing() {
        assert_eq!("200+".parse::<PriceRange>().unwrap(), PriceRange::Above200M);
        assert!("cheap".parse::<PriceRange>().is_err());

        let json = serde_json::to_string(&PriceRange::From50To100M).unwrap();
        assert_eq!(json, r#""50-100""#);
    }

    #[test]
    fn test_outcome_summary() {
        assert_eq!(FilterOutcome::new(1).summary(), "1 verified property available");
        assert_eq!(FilterOutcome::new(3).summary(), "3 verified properties available");
    }
}
