//! Transport NSW Trip Planner API client.
//!
//! This module provides an HTTP client for the two Trip Planner endpoints
//! the planner needs:
//! - `stop_finder` resolves a free-text station name to a stable stop ID
//! - `trip` plans journeys between two resolved stops
//!
//! Key characteristics of the API:
//! - Both endpoints require an `Authorization: apikey ...` header
//! - Response timestamps are UTC ISO-8601 and must be offset-corrected
//!   into local time during conversion
//! - Journeys arrive pre-ranked; response order is preserved
//! - Fields are omitted rather than sent as null in many cases

mod client;
mod convert;
mod error;
mod types;

pub use client::{TripClient, TripClientConfig};
pub use convert::{ConversionError, ParseWarning, ParsedJourneys, convert_trip_response};
pub use error::TripError;
pub use types::{
    AssignedStop, LocationMatch, RawFare, RawInfo, RawJourney, RawLeg, RawProduct,
    RawSequenceStop, RawStopEvent, RawStopProperties, RawTicket, RawTransportation,
    RawTransportationDestination, StopFinderResponse, TripResponse,
};
