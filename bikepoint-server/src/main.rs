use std::net::SocketAddr;

use bikepoint_server::availability::{BikePointChecker, DEFAULT_STATION_NAME};
use bikepoint_server::tfl::{TflClient, TflConfig};
use bikepoint_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Allow pointing at a local stub of the TfL API
    let mut config = TflConfig::new();
    if let Ok(base_url) = std::env::var("TFL_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let client = TflClient::new(config).expect("Failed to create TfL client");
    let checker = BikePointChecker::new(client.clone());

    let state = AppState::new(checker, client, DEFAULT_STATION_NAME);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    println!("Starting santander cycles service...");
    println!("listening on port {}", addr.port());
    println!();
    println!("Endpoints:");
    println!("  GET /                  - Bike point report");
    println!("  GET /health            - Readiness check");
    println!("  GET /health/readiness  - Readiness check");
    println!("  GET /health/liveness   - Liveness check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
