//! Availability lookup error types.

use crate::tfl::TflError;

/// Errors from the two-step availability lookup.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    /// Search returned no matching bike point
    #[error("no bike point found for query {query:?}")]
    NotFound { query: String },

    /// Search returned more than one bike point
    #[error("{count} bike points returned for query {query:?}, expected exactly one")]
    Ambiguous { query: String, count: usize },

    /// Bike point id not set before a fetch
    #[error("bike point id not set")]
    MissingId,

    /// The fetched record has no bike-count property
    #[error("unable to find the number of bikes available at: {station}")]
    MissingProperty { station: String },

    /// The bike-count value was not an integer
    #[error("unable to convert number of bikes {value:?} to an integer")]
    Parse {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Underlying API client failure
    #[error("BikePoint API error: {0}")]
    Tfl(#[from] TflError),
}
