//! TfL BikePoint API client.
//!
//! Thin async wrapper over the two BikePoint endpoints the checker
//! needs: free-text search and fetch-by-id.

mod client;
mod error;
mod types;

pub use client::{TflClient, TflConfig};
pub use error::TflError;
pub use types::{AdditionalProperty, BikePoint, NB_BIKES_KEY};
