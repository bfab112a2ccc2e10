//! route-ranker - nearest-first destination ranking service
//!
//! This is the composition root that wires together all the components.

use route_ranker::adapters::inbound::ApiServer;
use route_ranker::adapters::outbound::GoogleDistanceMatrix;
use route_ranker::config::load_config;
use route_ranker::domain::ports::DistanceResolver;
use route_ranker::{LinkBuilder, RoutePlanner};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting route-ranker listen={} mode={}",
        cfg.listen_addr,
        cfg.travel_mode
    );

    // ===== COMPOSITION ROOT =====

    // 1. Outbound adapter: distance provider
    let api_key = cfg.require_api_key()?.to_string();
    let resolver: Arc<dyn DistanceResolver> = Arc::new(GoogleDistanceMatrix::new(
        api_key,
        cfg.distance_matrix_url.clone(),
        cfg.travel_mode,
        Duration::from_secs(cfg.request_timeout_secs),
    )?);

    // 2. Application service
    let planner = Arc::new(RoutePlanner::new(
        resolver,
        LinkBuilder::new(cfg.maps_dir_url.clone()),
    ));

    // 3. Inbound adapter
    let server = ApiServer::new(cfg.listen_addr.clone(), planner);

    server.run().await
}
