//! Input Normalizer Service
//!
//! Turns raw start and destination signals into a canonical start
//! location and an ordered destination list.

use crate::domain::error::PlanError;
use crate::domain::value_objects::Location;

/// Separator between destinations in free-text input.
pub const DESTINATION_DELIMITER: char = ';';

/// Raw start signal as submitted by the caller.
#[derive(Debug, Clone, Default)]
pub struct StartSignal {
    /// Detected latitude (e.g. from browser geolocation)
    pub latitude: Option<String>,
    /// Detected longitude
    pub longitude: Option<String>,
    /// Manually entered start point
    pub manual: Option<String>,
}

/// Raw destination signal as submitted by the caller.
///
/// `rows` is the structured source (e.g. an uploaded CSV). Its presence,
/// not its content, decides which source is used.
#[derive(Debug, Clone, Default)]
pub struct DestinationSignal {
    pub rows: Option<Vec<Vec<String>>>,
    pub text: Option<String>,
}

/// Normalized pipeline input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub start: Location,
    pub destinations: Vec<Location>,
}

/// Input normalizer service.
pub struct InputNormalizer;

impl InputNormalizer {
    /// Normalize both signals and validate that neither side is empty.
    ///
    /// # Errors
    /// `PlanError::MissingInput` when the start is empty or no destination remains.
    pub fn normalize(
        start: &StartSignal,
        destinations: &DestinationSignal,
    ) -> Result<NormalizedInput, PlanError> {
        let start = Self::start_location(start);
        let destinations = Self::destinations(destinations);

        if start.is_empty() || destinations.is_empty() {
            return Err(PlanError::MissingInput);
        }

        Ok(NormalizedInput {
            start,
            destinations,
        })
    }

    /// Pick the start location; detected coordinates win over manual text.
    pub fn start_location(signal: &StartSignal) -> Location {
        let lat = non_empty(signal.latitude.as_deref());
        let lon = non_empty(signal.longitude.as_deref());

        match (lat, lon) {
            (Some(lat), Some(lon)) => Location::from_coordinates(lat, lon),
            _ => Location::new(signal.manual.as_deref().unwrap_or_default().trim()),
        }
    }

    /// Extract destinations from exactly one source.
    ///
    /// A present structured source shadows the free text even when it
    /// yields nothing usable.
    pub fn destinations(signal: &DestinationSignal) -> Vec<Location> {
        match &signal.rows {
            Some(rows) => rows
                .iter()
                .filter_map(|row| row.first())
                .filter_map(|field| non_empty(Some(field.as_str())))
                .map(Location::from)
                .collect(),
            None => signal
                .text
                .as_deref()
                .unwrap_or_default()
                .split(DESTINATION_DELIMITER)
                .filter_map(|part| non_empty(Some(part)))
                .map(Location::from)
                .collect(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
