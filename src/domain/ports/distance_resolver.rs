//! Distance Resolver Port
//!
//! Defines the interface for measuring travel distance from one origin
//! to many destinations.

use crate::domain::entities::DestinationStatus;
use crate::domain::error::ResolverError;
use crate::domain::value_objects::Location;
use async_trait::async_trait;

/// Resolver for origin-to-destinations travel distances.
///
/// This is an outbound port that abstracts the mapping provider.
/// Implementations may call Google Distance Matrix, OpenRouteService,
/// or return scripted outcomes in tests.
#[async_trait]
pub trait DistanceResolver: Send + Sync {
    /// Measure the distance from `origin` to every destination in one call.
    ///
    /// On success the result holds exactly one status per destination,
    /// with `result[i]` describing `destinations[i]`. Destinations the
    /// provider cannot route to are `DestinationStatus::NotFound`; only
    /// failures of the call itself are errors.
    async fn resolve(
        &self,
        origin: &Location,
        destinations: &[Location],
    ) -> Result<Vec<DestinationStatus>, ResolverError>;
}
