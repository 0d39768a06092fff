//! Dashboard view modes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NestError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Map,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::List, ViewMode::Map];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
            ViewMode::Map => "map",
        }
    }

    /// Toggle button tooltip
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid View",
            ViewMode::List => "List View",
            ViewMode::Map => "Map View",
        }
    }

    /// Container class for the card listing
    pub fn layout_class(&self) -> &'static str {
        match self {
            ViewMode::Grid => "listing listing-grid",
            ViewMode::List => "listing listing-list",
            ViewMode::Map => "listing listing-map",
        }
    }

    /// Map mode replaces the cards entirely
    pub fn shows_cards(&self) -> bool {
        !matches!(self, ViewMode::Map)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = NestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            "map" => Ok(ViewMode::Map),
            other => Err(NestError::UnknownViewMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
        assert_eq!("MAP".parse::<ViewMode>().unwrap(), ViewMode::Map);
        assert!("carousel".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_map_hides_cards() {
        assert!(ViewMode::Grid.shows_cards());
        assert!(ViewMode::List.shows_cards());
        assert!(!ViewMode::Map.shows_cards());
        assert_eq!(ViewMode::default(), ViewMode::Grid);
    }
}
