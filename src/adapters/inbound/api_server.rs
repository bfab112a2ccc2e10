//! Route Planning API Server
//!
//! HTTP API for ranking destinations by distance from a start point and
//! returning a navigation link through them.

use crate::application::{RoutePlan, RoutePlanner};
use crate::domain::entities::ResolvedDestination;
use crate::domain::error::PlanError;
use crate::domain::services::{DestinationSignal, StartSignal};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Plan request body.
///
/// Field names match the multipart upload form, so browser clients can
/// post the same data as JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRequest {
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<String>,
    #[serde(default)]
    pub start_point: Option<String>,
    /// Structured destination rows; the first field of each row is used
    #[serde(default)]
    pub rows: Option<Vec<Vec<String>>>,
    /// Destinations separated by `;`
    #[serde(default)]
    pub addresses: Option<String>,
}

impl PlanRequest {
    fn into_signals(self) -> (StartSignal, DestinationSignal) {
        (
            StartSignal {
                latitude: self.latitude,
                longitude: self.longitude,
                manual: self.start_point,
            },
            DestinationSignal {
                rows: self.rows,
                text: self.addresses,
            },
        )
    }
}

// Browser geolocation yields numbers; form posts yield strings.
fn coordinate<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Plan response body.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub destinations: Vec<ResolvedDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
}

impl From<RoutePlan> for PlanResponse {
    fn from(plan: RoutePlan) -> Self {
        Self {
            destinations: plan.destinations,
            maps_url: plan.route_link.map(|link| link.url),
        }
    }
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response: a status code and one human-readable message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        let status = match err {
            PlanError::MissingInput => StatusCode::BAD_REQUEST,
            PlanError::ResolverFailure(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    pub planner: Arc<RoutePlanner>,
}

impl ApiState {
    pub fn new(planner: Arc<RoutePlanner>) -> Self {
        Self { planner }
    }
}

/// API Server for route planning.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, planner: Arc<RoutePlanner>) -> Self {
        Self {
            listen_addr,
            state: ApiState::new(planner),
        }
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        Router::new()
            // Health endpoint
            .route("/health", get(health_handler))
            // JSON planning
            .route("/api/v1/plan", post(plan_handler))
            // Form upload planning (CSV file or text area)
            .route("/api/v1/plan/upload", post(upload_handler))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.state.clone())
    }

    /// Run the API server.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run(&self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("route planning API listening on {}", self.listen_addr);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Parse an uploaded CSV into rows of fields.
///
/// No header row is assumed and rows may have different lengths.
pub fn parse_csv_rows(data: &[u8]) -> Result<Vec<Vec<String>>, ApiError> {
    let text = std::str::from_utf8(data)
        .map_err(|_| ApiError::bad_request("CSV file is not valid UTF-8"))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ApiError::bad_request(format!("invalid CSV: {}", e)))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

// Handler functions

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn plan_handler(
    State(state): State<ApiState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let (start, destinations) = req.into_signals();
    let plan = state.planner.plan(&start, &destinations).await?;
    Ok(Json(plan.into()))
}

async fn upload_handler(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<Json<PlanResponse>, ApiError> {
    let mut req = PlanRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid form data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "csv_file" {
            // A file input left empty is still submitted, with no filename
            let has_file = field.file_name().is_some_and(|f| !f.is_empty());
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("invalid form data: {}", e)))?;
            if has_file {
                req.rows = Some(parse_csv_rows(&data)?);
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::bad_request(format!("invalid form data: {}", e)))?;
        match name.as_str() {
            "latitude" => req.latitude = Some(value),
            "longitude" => req.longitude = Some(value),
            "start_point" => req.start_point = Some(value),
            "addresses" => req.addresses = Some(value),
            other => tracing::debug!("ignoring form field: {}", other),
        }
    }

    let (start, destinations) = req.into_signals();
    let plan = state.planner.plan(&start, &destinations).await?;
    Ok(Json(plan.into()))
}
