//! Domain layer: entities, value objects, ports and pure services.
//!
//! Nothing in here performs I/O. The mapping provider is reached only
//! through the [`ports::DistanceResolver`] port.

pub mod entities;
pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{DestinationStatus, Measurement, ResolvedDestination, RouteLink};
pub use error::{PlanError, ResolverError};
pub use value_objects::{Location, TravelMode};
