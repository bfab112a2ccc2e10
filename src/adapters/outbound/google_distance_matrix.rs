//! Google Distance Matrix Resolver
//!
//! Implements DistanceResolver using the Google Maps Distance Matrix API.

use crate::domain::entities::{DestinationStatus, Measurement};
use crate::domain::error::ResolverError;
use crate::domain::ports::DistanceResolver;
use crate::domain::value_objects::{Location, TravelMode};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default Distance Matrix endpoint.
pub const DEFAULT_DISTANCE_MATRIX_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";

// Separator the API expects between multiple origins or destinations
const DESTINATIONS_SEPARATOR: &str = "|";

// --- Data Structures for parsing Distance Matrix responses ---

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    status: String,
    #[serde(default)]
    distance: Option<TextValue>,
    #[serde(default)]
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: u64,
}

/// Google Distance Matrix resolver.
///
/// Sends one request per plan with a single origin and every destination.
/// Elements the API cannot route (`NOT_FOUND`, `ZERO_RESULTS`, ...) become
/// `DestinationStatus::NotFound`; anything wrong with the call itself is
/// a `ResolverError`.
pub struct GoogleDistanceMatrix {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    mode: TravelMode,
}

impl GoogleDistanceMatrix {
    /// Create a resolver against the given endpoint.
    pub fn new(
        api_key: String,
        endpoint: String,
        mode: TravelMode,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            endpoint,
            mode,
        })
    }

    /// Create a resolver against the public Google endpoint.
    pub fn with_defaults(api_key: String) -> anyhow::Result<Self> {
        Self::new(
            api_key,
            DEFAULT_DISTANCE_MATRIX_URL.to_string(),
            TravelMode::default(),
            Duration::from_secs(15),
        )
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Convert a decoded response into per-destination statuses.
    fn parse_matrix(response: MatrixResponse) -> Result<Vec<DestinationStatus>, ResolverError> {
        if response.status != "OK" {
            return Err(ResolverError::Api {
                status: response.status,
                message: response.error_message.unwrap_or_default(),
            });
        }

        let row = response
            .rows
            .into_iter()
            .next()
            .ok_or_else(|| ResolverError::Malformed("response has no rows".to_string()))?;

        row.elements
            .into_iter()
            .enumerate()
            .map(|(i, element)| Self::parse_element(i, element))
            .collect()
    }

    fn parse_element(index: usize, element: MatrixElement) -> Result<DestinationStatus, ResolverError> {
        if element.status != "OK" {
            tracing::debug!("destination #{} not resolved: {}", index, element.status);
            return Ok(DestinationStatus::NotFound);
        }

        match (element.distance, element.duration) {
            (Some(distance), Some(duration)) => Ok(DestinationStatus::Ok(Measurement {
                distance_meters: distance.value,
                distance_text: distance.text,
                duration_text: duration.text,
            })),
            _ => Err(ResolverError::Malformed(format!(
                "element {} is OK but lacks distance or duration",
                index
            ))),
        }
    }
}

#[async_trait]
impl DistanceResolver for GoogleDistanceMatrix {
    async fn resolve(
        &self,
        origin: &Location,
        destinations: &[Location],
    ) -> Result<Vec<DestinationStatus>, ResolverError> {
        if destinations.is_empty() {
            return Ok(Vec::new());
        }

        let joined = destinations
            .iter()
            .map(Location::as_str)
            .collect::<Vec<_>>()
            .join(DESTINATIONS_SEPARATOR);

        tracing::debug!(
            "distance matrix request: {} destinations, mode={}",
            destinations.len(),
            self.mode
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("origins", origin.as_str()),
                ("destinations", joined.as_str()),
                ("mode", self.mode.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ResolverError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ResolverError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ResolverError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let matrix: MatrixResponse =
            serde_json::from_str(&body).map_err(|e| ResolverError::Malformed(e.to_string()))?;

        Self::parse_matrix(matrix)
    }
}
