//! Continue-past-errors report aggregation.
//!
//! A lookup always produces a report. Failed steps leave their zero-value
//! state in place instead of aborting, and the errors travel alongside
//! the partial result so callers choose how to present them.

use tracing::warn;

use crate::tfl::{BikePoint, TflClient};

use super::error::AvailabilityError;
use super::fetcher::AvailabilityFetcher;
use super::resolver::StationResolver;

/// Outcome of a full lookup, partial results included.
#[derive(Debug, Default)]
pub struct AvailabilityReport {
    /// The resolved station, or the default record if resolution failed.
    pub station: BikePoint,
    /// Number of available bikes, 0 if the fetch failed.
    pub bikes: i64,
    /// Errors collected from failed steps, in step order.
    pub errors: Vec<AvailabilityError>,
}

impl AvailabilityReport {
    /// Render the fixed-format report text.
    pub fn summary(&self) -> String {
        format!(
            "There is currently {} bike(s) at bike point: '{}'\nwhich is located at: {}\n",
            self.bikes, self.station.id, self.station.common_name
        )
    }
}

/// Runs the resolve-then-fetch sequence under the report policy.
#[derive(Debug, Clone)]
pub struct BikePointChecker {
    resolver: StationResolver,
    fetcher: AvailabilityFetcher,
}

impl BikePointChecker {
    /// Create a checker; both steps share the one client.
    pub fn new(client: TflClient) -> Self {
        Self {
            resolver: StationResolver::new(client.clone()),
            fetcher: AvailabilityFetcher::new(client),
        }
    }

    /// Look up a station by name and report its bike count.
    ///
    /// Both steps run unconditionally. A resolution failure leaves the
    /// default record in place, so the fetch then fails its id
    /// precondition and the report carries both errors.
    pub async fn check(&self, name: &str) -> AvailabilityReport {
        let mut report = AvailabilityReport::default();

        match self.resolver.resolve(name).await {
            Ok(station) => report.station = station,
            Err(e) => {
                warn!(query = name, error = %e, "station resolution failed");
                report.errors.push(e);
            }
        }

        match self.fetcher.fetch(&mut report.station).await {
            Ok(bikes) => report.bikes = bikes,
            Err(e) => {
                warn!(id = %report.station.id, error = %e, "bike count fetch failed");
                report.errors.push(e);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfl::TflConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STATION_NAME: &str = "Bank of England Museum, Bank";

    const SEARCH_BODY: &str = r#"[
        {
            "id": "BikePoints_340",
            "url": "/Place/BikePoints_340",
            "commonName": "Bank of England Museum, Bank",
            "placeType": "BikePoint",
            "additionalProperties": [],
            "lat": 51.514441,
            "lon": -0.087587
        }
    ]"#;

    const BY_ID_BODY: &str = r#"{
        "id": "BikePoints_340",
        "url": "/Place/BikePoints_340",
        "commonName": "Bank of England Museum, Bank",
        "placeType": "BikePoint",
        "additionalProperties": [
            {
                "category": "Description",
                "key": "NbBikes",
                "sourceSystemKey": "BikePoints",
                "value": "2",
                "modified": "2020-05-28T11:12:27.847Z"
            }
        ],
        "lat": 51.514441,
        "lon": -0.087587
    }"#;

    fn checker_for(server: &MockServer) -> BikePointChecker {
        let client = TflClient::new(TflConfig::new().with_base_url(server.uri())).unwrap();
        BikePointChecker::new(client)
    }

    #[tokio::test]
    async fn full_lookup_produces_clean_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/BikePoint/Search"))
            .and(query_param("query", STATION_NAME))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_BODY, "application/json"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/BikePoint/BikePoints_340"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(BY_ID_BODY, "application/json"))
            .mount(&server)
            .await;

        let report = checker_for(&server).check(STATION_NAME).await;

        assert!(report.errors.is_empty());
        assert_eq!(report.bikes, 2);
        assert_eq!(report.station.id, "BikePoints_340");
        assert_eq!(
            report.summary(),
            "There is currently 2 bike(s) at bike point: 'BikePoints_340'\n\
             which is located at: Bank of England Museum, Bank\n"
        );
    }

    #[tokio::test]
    async fn failed_resolution_still_renders_zero_value_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/BikePoint/Search"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
            .mount(&server)
            .await;

        let report = checker_for(&server).check(STATION_NAME).await;

        // Resolution fails, then the fetch precondition fails on the
        // still-default record: two errors, in step order.
        assert_eq!(report.errors.len(), 2);
        assert!(matches!(report.errors[0], AvailabilityError::NotFound { .. }));
        assert!(matches!(report.errors[1], AvailabilityError::MissingId));

        assert_eq!(report.bikes, 0);
        assert_eq!(
            report.summary(),
            "There is currently 0 bike(s) at bike point: ''\nwhich is located at: \n"
        );

        // Only the search call went out
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_keeps_resolved_station() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/BikePoint/Search"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_BODY, "application/json"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/BikePoint/BikePoints_340"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let report = checker_for(&server).check(STATION_NAME).await;

        assert_eq!(report.errors.len(), 1);
        assert!(matches!(report.errors[0], AvailabilityError::Tfl(_)));
        assert_eq!(report.bikes, 0);
        // The search-time record survives the failed fetch
        assert_eq!(report.station.id, "BikePoints_340");
    }

    #[test]
    fn summary_of_default_report() {
        let report = AvailabilityReport::default();
        assert_eq!(
            report.summary(),
            "There is currently 0 bike(s) at bike point: ''\nwhich is located at: \n"
        );
    }
}
