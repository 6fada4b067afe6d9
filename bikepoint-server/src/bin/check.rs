//! One-shot bike point check.
//!
//! Looks up the default docking station and prints its report to stdout.
//! Failed steps are printed too; the report still renders whatever state
//! the lookup produced.

use bikepoint_server::availability::{BikePointChecker, DEFAULT_STATION_NAME};
use bikepoint_server::tfl::{TflClient, TflConfig};

#[tokio::main]
async fn main() {
    let mut config = TflConfig::new();
    if let Ok(base_url) = std::env::var("TFL_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let client = TflClient::new(config).expect("Failed to create TfL client");
    let checker = BikePointChecker::new(client);

    let report = checker.check(DEFAULT_STATION_NAME).await;

    for error in &report.errors {
        println!("Error checking bike point: {error}");
    }
    print!("{}", report.summary());
}
