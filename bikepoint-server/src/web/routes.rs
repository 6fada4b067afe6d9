//! HTTP route handlers.

use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(report))
        .route("/health", get(health_readiness))
        .route("/health/readiness", get(health_readiness))
        .route("/health/liveness", get(health_liveness))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full availability report for the configured station.
///
/// Lookup errors are logged, never rendered; the body always carries
/// whatever partial state the lookup produced.
async fn report(State(state): State<AppState>) -> String {
    info!("handling request: report");

    let report = state.checker.check(&state.station_name).await;

    format!(
        "Welcome to the {} bike point checker!\n{}",
        state.station_name,
        report.summary()
    )
}

/// Readiness probe: healthy only if the upstream API answers at all.
async fn health_readiness(State(state): State<AppState>) -> (StatusCode, &'static str) {
    info!("handling request: readiness");

    match state.tfl.ping().await {
        Ok(status) => {
            info!(upstream_status = %status, "readiness upstream check");
            (StatusCode::OK, "status: healthy")
        }
        Err(e) => {
            warn!(error = %e, "readiness upstream check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "status: unhealthy")
        }
    }
}

/// Liveness probe: always healthy.
async fn health_liveness() -> &'static str {
    info!("handling request: liveness");
    "status: healthy"
}

/// Fallback for unknown paths.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Error: 404")
}
