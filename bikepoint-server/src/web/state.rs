//! Application state for the web layer.

use std::sync::Arc;

use crate::availability::BikePointChecker;
use crate::tfl::TflClient;

/// Shared application state.
///
/// Requests hold no state of their own; every report request re-resolves
/// the station from scratch.
#[derive(Clone)]
pub struct AppState {
    /// Two-step availability checker
    pub checker: Arc<BikePointChecker>,

    /// API client used by the readiness probe
    pub tfl: Arc<TflClient>,

    /// Station the report endpoint looks up
    pub station_name: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        checker: BikePointChecker,
        tfl: TflClient,
        station_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            checker: Arc::new(checker),
            tfl: Arc::new(tfl),
            station_name: station_name.into(),
        }
    }
}
