//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// A place understood by the distance resolver.
///
/// Either a `"lat,lon"` pair or a free-text address. The structure is
/// opaque to the domain; the mapping provider does all interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a location from a coordinate pair, formatted as `"lat,lon"`.
    pub fn from_coordinates(lat: &str, lon: &str) -> Self {
        Self(format!("{},{}", lat, lon))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Travel mode requested from the mapping provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// Parse a travel mode from a string.
    ///
    /// # Examples
    /// ```
    /// use route_ranker::domain::value_objects::TravelMode;
    ///
    /// assert_eq!(TravelMode::from_str("walking"), TravelMode::Walking);
    /// assert_eq!(TravelMode::from_str("hovercraft"), TravelMode::Driving); // fallback
    /// ```
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "driving" => Self::Driving,
            "walking" => Self::Walking,
            "bicycling" => Self::Bicycling,
            "transit" => Self::Transit,
            _ => Self::Driving, // fallback
        }
    }

    /// Convert to the provider's query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl Default for TravelMode {
    fn default() -> Self {
        Self::Driving
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
