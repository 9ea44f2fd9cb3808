//! Trip Planner HTTP client.
//!
//! Provides async methods for resolving stop names and searching trips.
//! Handles authentication, query encoding, and conversion to domain types.

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::domain::{StopRef, TzOffset};

use super::convert::{ParsedJourneys, convert_trip_response};
use super::error::TripError;
use super::types::{StopFinderResponse, TripResponse};

/// Default base URL for the Trip Planner API.
const DEFAULT_BASE_URL: &str = "https://api.transport.nsw.gov.au/v1/tp";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default result-count hint for trip searches.
const DEFAULT_TRIP_COUNT: u8 = 15;

/// Configuration for the Trip Planner client.
#[derive(Debug, Clone)]
pub struct TripClientConfig {
    /// API key for `Authorization: apikey` authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Fixed UTC offset applied to query and response times
    pub tz_offset: TzOffset,
    /// How many trips to ask the API for per search
    pub trip_count: u8,
}

impl TripClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            tz_offset: TzOffset::SYDNEY,
            trip_count: DEFAULT_TRIP_COUNT,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the UTC offset used for time conversion.
    pub fn with_tz_offset(mut self, offset: TzOffset) -> Self {
        self.tz_offset = offset;
        self
    }

    /// Set the trip-count hint.
    pub fn with_trip_count(mut self, count: u8) -> Self {
        self.trip_count = count;
        self
    }
}

/// Transport NSW Trip Planner API client.
///
/// Each call owns its request; no state is shared across calls beyond
/// reqwest's connection pool, so the client is cheap to clone and safe to
/// call repeatedly with identical arguments.
#[derive(Debug, Clone)]
pub struct TripClient {
    http: reqwest::Client,
    base_url: String,
    tz_offset: TzOffset,
    trip_count: u8,
}

impl TripClient {
    /// Create a new Trip Planner client with the given configuration.
    pub fn new(config: TripClientConfig) -> Result<Self, TripError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let auth = HeaderValue::from_str(&format!("apikey {}", config.api_key)).map_err(|_| {
            TripError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            tz_offset: config.tz_offset,
            trip_count: config.trip_count,
        })
    }

    /// Resolve a free-text station name to a stable stop reference.
    ///
    /// Takes the first assigned stop of the first location match; the API
    /// ranks candidates, so the first match wins and no disambiguation is
    /// attempted. Fails with [`TripError::StopNotFound`] when the lookup
    /// returns no usable stop.
    pub async fn resolve_stop(&self, name: &str) -> Result<StopRef, TripError> {
        let url = format!("{}/stop_finder", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("outputFormat", "rapidJson"),
                ("type_sf", "stop"),
                ("name_sf", name),
                ("coordOutputFormat", "EPSG:4326"),
                ("TfNSWSF", "true"),
            ])
            .send()
            .await?;

        let body = read_body(response).await?;

        let parsed: StopFinderResponse =
            serde_json::from_str(&body).map_err(|e| TripError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        first_assigned_stop(parsed, name)
    }

    /// Search for trips between two resolved stops departing at `at`.
    ///
    /// Issues exactly one request; the response is filtered down to direct
    /// heavy-rail journeys in the order the API ranked them.
    pub async fn search_trips(
        &self,
        origin_id: &str,
        destination_id: &str,
        at: DateTime<Utc>,
    ) -> Result<ParsedJourneys, TripError> {
        let (itd_date, itd_time) = self.tz_offset.to_query_parts(at);
        let trip_count = self.trip_count.to_string();
        let url = format!("{}/trip", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("outputFormat", "rapidJson"),
                ("coordOutputFormat", "EPSG:4326"),
                ("depArrMacro", "dep"),
                ("itdDate", itd_date.as_str()),
                ("itdTime", itd_time.as_str()),
                ("type_origin", "any"),
                ("name_origin", origin_id),
                ("type_destination", "any"),
                ("name_destination", destination_id),
                ("calcNumberOfTrips", trip_count.as_str()),
            ])
            .send()
            .await?;

        let body = read_body(response).await?;

        let parsed: TripResponse = serde_json::from_str(&body).map_err(|e| TripError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        Ok(convert_trip_response(&parsed, self.tz_offset))
    }

    /// Plan a trip between two named stations departing at `at`.
    ///
    /// Resolves both names concurrently (they have no dependency on each
    /// other), then issues a single trip search with the resolved stop IDs.
    /// Returns an empty journey list when nothing qualifies after filtering;
    /// that is not an error.
    pub async fn plan_trip(
        &self,
        origin_name: &str,
        destination_name: &str,
        at: DateTime<Utc>,
    ) -> Result<ParsedJourneys, TripError> {
        let (origin, destination) = futures::try_join!(
            self.resolve_stop(origin_name),
            self.resolve_stop(destination_name),
        )?;

        tracing::debug!(
            origin = %origin.name,
            destination = %destination.name,
            "resolved stops"
        );

        self.search_trips(&origin.global_id, &destination.global_id, at)
            .await
    }
}

/// Pick the first assigned stop of the first location match.
fn first_assigned_stop(response: StopFinderResponse, name: &str) -> Result<StopRef, TripError> {
    response
        .locations
        .into_iter()
        .next()
        .and_then(|location| location.assigned_stops.into_iter().next())
        .map(|stop| StopRef {
            name: stop.name,
            platform: String::new(),
            global_id: stop.id,
        })
        .ok_or_else(|| TripError::StopNotFound {
            name: name.to_string(),
        })
}

/// Map the response status to an error class and read the body.
async fn read_body(response: reqwest::Response) -> Result<String, TripError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(TripError::Unauthorized);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(TripError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TripError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TripClientConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.tz_offset, TzOffset::SYDNEY);
        assert_eq!(config.trip_count, 15);
    }

    #[test]
    fn config_builder() {
        let config = TripClientConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60)
            .with_tz_offset(TzOffset::hours(0))
            .with_trip_count(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.tz_offset, TzOffset::hours(0));
        assert_eq!(config.trip_count, 5);
    }

    #[test]
    fn client_creation() {
        let client = TripClient::new(TripClientConfig::new("test-key"));
        assert!(client.is_ok());
    }

    #[test]
    fn first_match_wins() {
        let json = r#"{
            "locations": [
                {"assignedStops": [
                    {"name": "Hornsby Station", "id": "X1"},
                    {"name": "Hornsby Station, Platform 2", "id": "X2"}
                ]},
                {"assignedStops": [{"name": "Hornsby Bus Interchange", "id": "X9"}]}
            ]
        }"#;
        let response: StopFinderResponse = serde_json::from_str(json).unwrap();

        let stop = first_assigned_stop(response, "Hornsby").unwrap();

        assert_eq!(stop.name, "Hornsby Station");
        assert_eq!(stop.global_id, "X1");
        assert_eq!(stop.platform, "");
    }

    #[test]
    fn empty_locations_is_a_lookup_failure() {
        let response: StopFinderResponse =
            serde_json::from_str(r#"{"locations": []}"#).unwrap();

        let err = first_assigned_stop(response, "Nonexistent Place").unwrap_err();

        assert!(matches!(err, TripError::StopNotFound { name } if name == "Nonexistent Place"));
    }

    #[test]
    fn location_without_stops_is_a_lookup_failure() {
        let response: StopFinderResponse =
            serde_json::from_str(r#"{"locations": [{"assignedStops": []}]}"#).unwrap();

        let err = first_assigned_stop(response, "Hornsby").unwrap_err();

        assert!(matches!(err, TripError::StopNotFound { .. }));
    }

    // Integration tests would go here, but require a real API key and
    // would make actual HTTP requests. They should be marked with
    // #[ignore] and run separately.
}
