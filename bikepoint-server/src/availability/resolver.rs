//! Station name resolution.

use tracing::debug;

use crate::tfl::{BikePoint, TflClient};

use super::error::AvailabilityError;

/// Resolves a free-text station name to a single bike point.
///
/// The search endpoint may match any number of stations; anything other
/// than exactly one match is an error. There is deliberately no
/// disambiguation heuristic.
#[derive(Debug, Clone)]
pub struct StationResolver {
    client: TflClient,
}

impl StationResolver {
    /// Create a resolver backed by the given client.
    pub fn new(client: TflClient) -> Self {
        Self { client }
    }

    /// Resolve a station name, requiring exactly one search match.
    ///
    /// Performs exactly one outbound call; cardinality violations are
    /// decided locally from the decoded result.
    pub async fn resolve(&self, name: &str) -> Result<BikePoint, AvailabilityError> {
        let mut matches = self.client.search(name).await?;

        debug!(query = name, count = matches.len(), "bike point search");

        match matches.len() {
            0 => Err(AvailabilityError::NotFound {
                query: name.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(AvailabilityError::Ambiguous {
                query: name.to_string(),
                count,
            }),
        }
    }
}
