//! Route Planner - Main application use case
//!
//! Orchestrates the ranking pipeline: normalizing input, resolving
//! distances, ranking destinations and building the route link. This is
//! the primary interface for the inbound adapter.

use crate::domain::entities::{ResolvedDestination, RouteLink};
use crate::domain::error::{PlanError, ResolverError};
use crate::domain::ports::DistanceResolver;
use crate::domain::services::{
    DestinationSignal, InputNormalizer, LinkBuilder, NormalizedInput, Ranker, StartSignal,
};
use std::sync::Arc;
use tracing::Instrument;

/// Result of a successful planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    /// Every destination, nearest first, unresolved ones last
    pub destinations: Vec<ResolvedDestination>,
    /// Navigation link, absent when no destination was resolved
    pub route_link: Option<RouteLink>,
}

/// Route planner - main application use case.
///
/// This service runs the pipeline once per request:
/// 1. Normalizes the start and destination signals
/// 2. Resolves all distances in a single provider call
/// 3. Ranks destinations nearest first
/// 4. Builds the navigation link
///
/// It holds no per-request state and can be shared behind an `Arc`.
pub struct RoutePlanner {
    resolver: Arc<dyn DistanceResolver>,
    link_builder: LinkBuilder,
}

impl RoutePlanner {
    /// Create a new route planner.
    pub fn new(resolver: Arc<dyn DistanceResolver>, link_builder: LinkBuilder) -> Self {
        Self {
            resolver,
            link_builder,
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// Either produces a complete plan or fails atomically; no partial
    /// results are returned on error.
    ///
    /// # Errors
    /// * `PlanError::MissingInput` - checked before the resolver is called
    /// * `PlanError::ResolverFailure` - the provider call failed
    pub async fn plan(
        &self,
        start: &StartSignal,
        destinations: &DestinationSignal,
    ) -> Result<RoutePlan, PlanError> {
        let span = tracing::info_span!("plan", request_id = %uuid::Uuid::new_v4());

        async {
            let input = InputNormalizer::normalize(start, destinations).map_err(|e| {
                tracing::warn!("rejected plan request: {}", e);
                e
            })?;
            self.plan_normalized(&input).await
        }
        .instrument(span)
        .await
    }

    /// Run the pipeline on already-normalized input.
    pub async fn plan_normalized(&self, input: &NormalizedInput) -> Result<RoutePlan, PlanError> {
        if input.start.is_empty() || input.destinations.is_empty() {
            return Err(PlanError::MissingInput);
        }

        tracing::debug!(
            "resolving {} destinations from {}",
            input.destinations.len(),
            input.start
        );

        let statuses = self
            .resolver
            .resolve(&input.start, &input.destinations)
            .await
            .map_err(|e| {
                tracing::error!("distance resolver failed: {}", e);
                e
            })?;

        if statuses.len() != input.destinations.len() {
            let err = ResolverError::LengthMismatch {
                expected: input.destinations.len(),
                got: statuses.len(),
            };
            tracing::error!("distance resolver failed: {}", err);
            return Err(err.into());
        }

        let ranked = Ranker::rank(&input.destinations, statuses);
        let route_link = self.link_builder.build(&input.start, &ranked);

        let resolved = ranked.iter().filter(|d| d.is_ok()).count();
        tracing::info!(
            "ranked {} destinations ({} resolved, link={})",
            ranked.len(),
            resolved,
            route_link.is_some()
        );

        Ok(RoutePlan {
            destinations: ranked,
            route_link,
        })
    }

    /// Get the link builder used by this planner.
    pub fn link_builder(&self) -> &LinkBuilder {
        &self.link_builder
    }
}
