//! Link Builder Service
//!
//! Builds a navigation URL that visits the resolved destinations in
//! ranked order and ends at the farthest one.

use crate::domain::entities::{ResolvedDestination, RouteLink};
use crate::domain::value_objects::Location;

/// Separator between intermediate stops in the `waypoints` parameter.
pub const WAYPOINT_DELIMITER: &str = "|";

/// Default map-directions endpoint.
pub const DEFAULT_MAPS_DIR_URL: &str = "https://www.google.com/maps/dir/";

/// Link builder service.
///
/// Produces URLs of the form
/// `<base>?api=1&origin=<start>&destination=<final>&waypoints=<s1>|<s2>`.
/// Each location is percent-encoded; the pipe separators stay literal.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a route link from a ranked list.
    ///
    /// Only resolved destinations take part, in their ranked order. The last
    /// one becomes the destination, the rest become waypoints. Returns `None`
    /// when nothing was resolved.
    pub fn build(&self, origin: &Location, ranked: &[ResolvedDestination]) -> Option<RouteLink> {
        let mut stops: Vec<Location> = ranked
            .iter()
            .filter(|d| d.is_ok())
            .map(|d| d.address.clone())
            .collect();

        let destination = stops.pop()?;
        let url = self.format_url(origin, &destination, &stops);

        Some(RouteLink {
            origin: origin.clone(),
            destination,
            waypoints: stops,
            url,
        })
    }

    fn format_url(&self, origin: &Location, destination: &Location, waypoints: &[Location]) -> String {
        let mut url = format!(
            "{}?api=1&origin={}&destination={}",
            self.base_url,
            urlencoding::encode(origin.as_str()),
            urlencoding::encode(destination.as_str()),
        );

        if !waypoints.is_empty() {
            let joined = waypoints
                .iter()
                .map(|w| urlencoding::encode(w.as_str()).into_owned())
                .collect::<Vec<_>>()
                .join(WAYPOINT_DELIMITER);
            url.push_str("&waypoints=");
            url.push_str(&joined);
        }

        url
    }
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAPS_DIR_URL)
    }
}
