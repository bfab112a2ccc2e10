//! route-ranker Library
//!
//! Ranks destinations by travel distance from a start point and builds a
//! navigation link through them. Exposed as a library for the server
//! binary and for integration tests.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use application::{RoutePlan, RoutePlanner};
pub use config::load_config;
pub use domain::entities::{DestinationStatus, Measurement, ResolvedDestination, RouteLink};
pub use domain::error::{PlanError, ResolverError};
pub use domain::ports::DistanceResolver;
pub use domain::services::{DestinationSignal, InputNormalizer, LinkBuilder, Ranker, StartSignal};
pub use domain::value_objects::{Location, TravelMode};
