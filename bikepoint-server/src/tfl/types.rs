//! Wire types for the BikePoint API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Property key holding the number of available bikes.
pub const NB_BIKES_KEY: &str = "NbBikes";

/// A docking station record as returned by the BikePoint endpoints.
///
/// Every field defaults when absent; TfL omits `distance` outside
/// proximity searches, and the search response carries a trimmed-down
/// record compared to the by-id one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BikePoint {
    pub id: String,
    pub url: String,
    pub distance: f32,
    pub common_name: String,
    pub place_type: String,
    pub additional_properties: Vec<AdditionalProperty>,
    pub lat: f64,
    pub lon: f64,
}

impl BikePoint {
    /// First property with the given key, if any.
    pub fn property(&self, key: &str) -> Option<&AdditionalProperty> {
        self.additional_properties.iter().find(|p| p.key == key)
    }
}

/// A key/value annotation attached to a bike point.
///
/// Values are strings even when semantically numeric; callers parse at
/// read time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalProperty {
    pub category: String,
    pub key: String,
    pub source_system_key: String,
    pub value: String,
    pub modified: Option<DateTime<Utc>>,
}
