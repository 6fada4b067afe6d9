//! Two-step availability lookup.
//!
//! A free-text station name is resolved to a bike-point id via the search
//! endpoint, then the live record for that id is fetched and its bike
//! count read. The report type captures the deliberate continue-past-
//! errors presentation policy shared by the CLI and the service.

mod error;
mod fetcher;
mod report;
mod resolver;

pub use error::AvailabilityError;
pub use fetcher::AvailabilityFetcher;
pub use report::{AvailabilityReport, BikePointChecker};
pub use resolver::StationResolver;

/// The docking station both binaries report on.
pub const DEFAULT_STATION_NAME: &str = "Bank of England Museum, Bank";
