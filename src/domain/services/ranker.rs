//! Ranker Service
//!
//! Pairs destinations with resolver outcomes and orders them by distance.
//! Pure domain logic, no I/O.

use crate::domain::entities::{DestinationStatus, ResolvedDestination};
use crate::domain::value_objects::Location;

/// Ranker service.
///
/// Orders destinations nearest first. Destinations the provider could
/// not resolve are kept, marked, and placed after every resolved one.
pub struct Ranker;

impl Ranker {
    /// Label and sort destinations by resolved distance.
    ///
    /// `statuses[i]` must describe `destinations[i]`; callers check the
    /// lengths match before ranking.
    ///
    /// The sort is stable: entries with equal keys (duplicate addresses,
    /// equal distances, or several not-found entries) keep their input order.
    pub fn rank(
        destinations: &[Location],
        statuses: Vec<DestinationStatus>,
    ) -> Vec<ResolvedDestination> {
        debug_assert_eq!(destinations.len(), statuses.len());

        let mut ranked: Vec<ResolvedDestination> = destinations
            .iter()
            .zip(statuses)
            .map(|(destination, status)| ResolvedDestination::new(destination, status))
            .collect();

        // `sort_by_key` is stable
        ranked.sort_by_key(|d| d.status.sort_key());
        ranked
    }
}
