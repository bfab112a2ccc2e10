//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the ranking pipeline.
//! They live for a single request and contain only business logic.

use crate::domain::value_objects::Location;
use serde::Serialize;

/// Marker appended to the address of a destination the provider could not resolve.
pub const NOT_FOUND_MARKER: &str = "(Not found)";

/// A successful travel measurement from the start to one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Travel distance in meters
    pub distance_meters: u64,
    /// Human-readable distance, as reported by the provider (e.g. "1.2 km")
    pub distance_text: String,
    /// Human-readable duration, as reported by the provider (e.g. "8 mins")
    pub duration_text: String,
}

impl Measurement {
    pub fn new(
        distance_meters: u64,
        distance_text: impl Into<String>,
        duration_text: impl Into<String>,
    ) -> Self {
        Self {
            distance_meters,
            distance_text: distance_text.into(),
            duration_text: duration_text.into(),
        }
    }
}

/// Per-destination result of a resolver call.
///
/// Exactly one of the two holds: a full measurement, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DestinationStatus {
    Ok(Measurement),
    NotFound,
}

impl DestinationStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            Self::Ok(m) => Some(m),
            Self::NotFound => None,
        }
    }

    /// Ordering key used by the ranker.
    pub fn sort_key(&self) -> SortKey {
        match self {
            Self::Ok(m) => SortKey::Distance(m.distance_meters),
            Self::NotFound => SortKey::Unreachable,
        }
    }
}

/// Ranking key: any distance sorts before `Unreachable`.
///
/// Variant order is significant for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Distance(u64),
    Unreachable,
}

/// A destination paired with its resolver outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDestination {
    /// Destination address; suffixed with [`NOT_FOUND_MARKER`] when unresolved
    pub address: Location,
    #[serde(flatten)]
    pub status: DestinationStatus,
}

impl ResolvedDestination {
    /// Label a destination with its outcome.
    pub fn new(destination: &Location, status: DestinationStatus) -> Self {
        let address = match status {
            DestinationStatus::Ok(_) => destination.clone(),
            DestinationStatus::NotFound => {
                Location::new(format!("{} {}", destination, NOT_FOUND_MARKER))
            }
        };
        Self { address, status }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// A navigation link through the ranked destinations.
///
/// Regenerated for every request; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLink {
    /// Start location, unmodified
    pub origin: Location,
    /// Farthest successful destination in ranked order
    pub destination: Location,
    /// All other successful destinations, in ranked order
    pub waypoints: Vec<Location>,
    /// Fully assembled URL
    pub url: String,
}

impl std::fmt::Display for RouteLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}
