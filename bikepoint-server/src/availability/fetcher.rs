//! Live bike-count fetch.

use tracing::debug;

use crate::tfl::{BikePoint, NB_BIKES_KEY, TflClient};

use super::error::AvailabilityError;

/// Fetches the live record for a resolved bike point and reads its bike
/// count from the property list.
#[derive(Debug, Clone)]
pub struct AvailabilityFetcher {
    client: TflClient,
}

impl AvailabilityFetcher {
    /// Create a fetcher backed by the given client.
    pub fn new(client: TflClient) -> Self {
        Self { client }
    }

    /// Fetch the number of available bikes at a bike point.
    ///
    /// Requires `station.id` to be set; an empty id fails before any
    /// network call. On a successful fetch the caller's record is replaced
    /// wholesale with the freshly decoded one, which carries the full
    /// property list the search response omits.
    pub async fn fetch(&self, station: &mut BikePoint) -> Result<i64, AvailabilityError> {
        if station.id.is_empty() {
            return Err(AvailabilityError::MissingId);
        }

        *station = self.client.get_bike_point(&station.id).await?;

        let bikes = read_bike_count(station)?;

        debug!(id = %station.id, bikes, "fetched bike point");

        Ok(bikes)
    }
}

/// Scan the property list for the first bike-count entry and parse it.
fn read_bike_count(station: &BikePoint) -> Result<i64, AvailabilityError> {
    let prop =
        station
            .property(NB_BIKES_KEY)
            .ok_or_else(|| AvailabilityError::MissingProperty {
                station: station.common_name.clone(),
            })?;

    prop.value
        .parse()
        .map_err(|source| AvailabilityError::Parse {
            value: prop.value.clone(),
            source,
        })
}
