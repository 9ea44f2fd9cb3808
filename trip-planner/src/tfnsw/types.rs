//! Trip Planner API response DTOs.
//!
//! These types map directly to the JSON the Trip Planner API returns.
//! They use `Option` and `#[serde(default)]` liberally because the API
//! omits fields rather than sending null values in many cases; required-ness
//! is enforced during conversion so that one malformed journey cannot poison
//! the whole response.

use serde::Deserialize;

/// Response from the `stop_finder` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StopFinderResponse {
    /// Candidate matches for the queried name, best first.
    #[serde(default)]
    pub locations: Vec<LocationMatch>,
}

/// One candidate location match.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMatch {
    /// Physical stops assigned to this location.
    #[serde(default)]
    pub assigned_stops: Vec<AssignedStop>,
}

/// A physical stop assigned to a location match.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignedStop {
    /// Display name of the stop.
    pub name: String,
    /// Stable global identifier.
    pub id: String,
}

/// Response from the `trip` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TripResponse {
    /// Journey offers in the API's ranking order.
    #[serde(default)]
    pub journeys: Vec<RawJourney>,
}

/// One journey offer.
#[derive(Debug, Clone, Deserialize)]
pub struct RawJourney {
    #[serde(default)]
    pub legs: Vec<RawLeg>,
    pub fare: Option<RawFare>,
}

/// One leg of a raw journey.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeg {
    /// Travel time in seconds.
    pub duration: Option<u32>,

    /// Boarding point, including its departure timestamps.
    pub origin: Option<RawStopEvent>,

    /// Alighting point, including its arrival timestamps.
    pub destination: Option<RawStopEvent>,

    /// The line serving this leg.
    pub transportation: Option<RawTransportation>,

    /// Intermediate stops in travel order.
    #[serde(default)]
    pub stop_sequence: Vec<RawSequenceStop>,

    /// Service notices attached to this leg.
    #[serde(default)]
    pub infos: Vec<RawInfo>,
}

/// A stop as it appears at a leg endpoint.
///
/// Departure fields are populated on origins, arrival fields on
/// destinations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStopEvent {
    /// Stable global identifier.
    pub id: Option<String>,

    /// Ready-to-use display name (plain stops).
    pub name: Option<String>,

    /// Composite "Station, Suburb"-style name (platform-level entries).
    pub disassembled_name: Option<String>,

    /// Endpoint type; "stop" or a platform-level variant.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub properties: Option<RawStopProperties>,

    /// Scheduled departure (UTC ISO-8601).
    pub departure_time_planned: Option<String>,

    /// Real-time departure estimate (UTC ISO-8601).
    pub departure_time_estimated: Option<String>,

    /// Scheduled arrival (UTC ISO-8601).
    pub arrival_time_planned: Option<String>,

    /// Real-time arrival estimate (UTC ISO-8601).
    pub arrival_time_estimated: Option<String>,
}

/// Property bag attached to stops.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStopProperties {
    /// Prefixed platform code; the numeric platform is its suffix.
    pub platform: Option<String>,

    /// Carriage count, reported only for some services.
    #[serde(rename = "NumberOfCars")]
    pub number_of_cars: Option<String>,
}

/// The line serving a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransportation {
    /// Display name of the line.
    pub name: Option<String>,

    /// The line's terminus.
    pub destination: Option<RawTransportationDestination>,

    /// Product classification (mode of transport).
    pub product: Option<RawProduct>,
}

/// Terminus of a line.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransportationDestination {
    pub name: Option<String>,
}

/// Transport product classification.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    /// Mode code; heavy rail is class 1.
    pub class: Option<i32>,
}

/// One intermediate stop in a leg's stop sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSequenceStop {
    pub id: Option<String>,
    pub disassembled_name: Option<String>,
    pub properties: Option<RawStopProperties>,
}

/// A service notice.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInfo {
    pub priority: Option<String>,
    pub url: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
}

/// Fare information for a journey.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFare {
    /// Ticket options; adult first, child second.
    #[serde(default)]
    pub tickets: Vec<RawTicket>,
}

/// One ticket option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTicket {
    pub price_brutto: Option<f64>,
}
