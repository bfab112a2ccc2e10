//! Integration tests for the HTTP API
//!
//! Runs the API server on a random port with a Wiremock-backed distance
//! provider and talks to it over real HTTP.

use route_ranker::adapters::inbound::ApiServer;
use route_ranker::adapters::outbound::GoogleDistanceMatrix;
use route_ranker::{LinkBuilder, RoutePlanner, TravelMode};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MATRIX_PATH: &str = "/maps/api/distancematrix/json";

/// Start the API server in the background and return its base URL.
async fn spawn_server(provider: &MockServer) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let resolver = GoogleDistanceMatrix::new(
        "integration-key".to_string(),
        format!("{}{}", provider.uri(), MATRIX_PATH),
        TravelMode::Driving,
        Duration::from_secs(2),
    )
    .unwrap();
    let planner = Arc::new(RoutePlanner::new(
        Arc::new(resolver),
        LinkBuilder::new("https://maps.example/dir/"),
    ));
    let server = ApiServer::new(addr.to_string(), planner);

    let handle = tokio::spawn(async move {
        let _ = server.run().await;
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    (format!("http://{}", addr), handle)
}

/// Test a full plan over HTTP
#[tokio::test]
async fn test_plan_over_http() {
    let provider = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MATRIX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "rows": [{ "elements": [
                { "status": "OK", "distance": { "text": "9 km", "value": 9000 }, "duration": { "text": "12 mins", "value": 720 } },
                { "status": "ZERO_RESULTS" },
                { "status": "OK", "distance": { "text": "3 km", "value": 3000 }, "duration": { "text": "6 mins", "value": 360 } }
            ]}]
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let (base_url, handle) = spawn_server(&provider).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/api/v1/plan", base_url))
        .json(&json!({
            "latitude": 48.11,
            "longitude": -1.68,
            "addresses": "Saint-Malo; Island ; Vitre"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();

    let dests = body["destinations"].as_array().unwrap();
    assert_eq!(dests[0]["address"], "Vitre");
    assert_eq!(dests[0]["duration_text"], "6 mins");
    assert_eq!(dests[1]["address"], "Saint-Malo");
    assert_eq!(dests[2]["address"], "Island (Not found)");
    assert_eq!(dests[2]["status"], "not_found");
    assert_eq!(
        body["maps_url"],
        "https://maps.example/dir/?api=1&origin=48.11%2C-1.68&destination=Saint-Malo&waypoints=Vitre"
    );

    handle.abort();
}

/// Test provider outage surfaces as a gateway error with the cause
#[tokio::test]
async fn test_provider_outage_over_http() {
    let provider = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MATRIX_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&provider)
        .await;

    let (base_url, handle) = spawn_server(&provider).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/api/v1/plan", base_url))
        .json(&json!({ "start_point": "Rennes", "addresses": "Vitre" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 502);
    let body: serde_json::Value = resp.json().await.unwrap();
    let msg = body["error"].as_str().unwrap();
    assert!(msg.starts_with("An unexpected error occurred:"));
    assert!(msg.contains("503"));

    handle.abort();
}

/// Test validation failure over HTTP never reaches the provider
#[tokio::test]
async fn test_missing_input_over_http() {
    let provider = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    let (base_url, handle) = spawn_server(&provider).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/api/v1/plan", base_url))
        .json(&json!({ "start_point": "Rennes", "addresses": " ; " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Please provide a starting point and at least one destination."
    );

    handle.abort();
}
