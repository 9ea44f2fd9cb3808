//! Conversion from Trip Planner DTOs to domain types.
//!
//! This module turns one raw `/trip` response into ordered domain journeys.
//! Only direct heavy-rail journeys are retained; everything else is dropped
//! silently. A journey that fails field-level validation is skipped and
//! reported as a warning rather than aborting the whole result set.

use crate::domain::{
    Alert, Journey, Leg, LegStop, StopKind, StopRef, TimestampError, TzOffset,
};

use super::types::{
    RawInfo, RawJourney, RawLeg, RawSequenceStop, RawStopEvent, TripResponse,
};

/// Transportation product class for heavy rail.
const RAIL_CLASS: i32 = 1;

/// Length of the fixed tag the API prefixes onto platform codes.
const PLATFORM_PREFIX_LEN: usize = 3;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse an upstream timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] TimestampError),

    /// Platform code had no numeric suffix after the prefix
    #[error("invalid platform code {0:?}: expected a numeric suffix")]
    InvalidPlatform(String),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// A journey that could not be converted.
#[derive(Debug, Clone)]
pub struct ParseWarning {
    /// Index of the journey in the raw response.
    pub journey_index: usize,
    /// What went wrong.
    pub error: ConversionError,
}

/// Outcome of converting a trip response.
#[derive(Debug, Clone, Default)]
pub struct ParsedJourneys {
    /// Qualifying journeys, in the order the API returned them.
    pub journeys: Vec<Journey>,
    /// Journeys dropped because a field failed validation.
    pub warnings: Vec<ParseWarning>,
}

/// Convert a trip response to domain journeys.
///
/// Response order is the API's ranking and is preserved. Journeys that are
/// not direct heavy-rail are filtered out silently; journeys with malformed
/// fields are skipped and recorded in [`ParsedJourneys::warnings`].
pub fn convert_trip_response(response: &TripResponse, offset: TzOffset) -> ParsedJourneys {
    let mut parsed = ParsedJourneys::default();

    for (journey_index, raw) in response.journeys.iter().enumerate() {
        if !is_direct_rail(raw) {
            continue;
        }

        match convert_journey(raw, offset) {
            Ok(journey) => parsed.journeys.push(journey),
            Err(error) => {
                tracing::warn!(journey_index, %error, "skipping malformed journey");
                parsed.warnings.push(ParseWarning {
                    journey_index,
                    error,
                });
            }
        }
    }

    parsed
}

/// Keep only single-leg journeys whose first leg is heavy rail.
///
/// Multi-leg and non-rail options are unsupported by this planner, not an
/// error.
fn is_direct_rail(raw: &RawJourney) -> bool {
    raw.legs.len() == 1
        && raw.legs[0]
            .transportation
            .as_ref()
            .and_then(|t| t.product.as_ref())
            .and_then(|p| p.class)
            == Some(RAIL_CLASS)
}

fn convert_journey(raw: &RawJourney, offset: TzOffset) -> Result<Journey, ConversionError> {
    // The filter guarantees exactly one leg.
    let leg = convert_leg(&raw.legs[0], offset)?;
    let (adult_price, child_price) = convert_fares(raw);

    Ok(Journey::direct(leg, adult_price, child_price))
}

/// Fares come from the first two ticket entries (adult, child). Anything
/// less complete defaults both prices to zero.
fn convert_fares(raw: &RawJourney) -> (f64, f64) {
    match &raw.fare {
        Some(fare) if fare.tickets.len() >= 2 => (
            fare.tickets[0].price_brutto.unwrap_or(0.0),
            fare.tickets[1].price_brutto.unwrap_or(0.0),
        ),
        _ => (0.0, 0.0),
    }
}

fn convert_leg(raw: &RawLeg, offset: TzOffset) -> Result<Leg, ConversionError> {
    let duration_secs = raw
        .duration
        .ok_or(ConversionError::MissingField("leg.duration"))?;

    let raw_origin = raw
        .origin
        .as_ref()
        .ok_or(ConversionError::MissingField("leg.origin"))?;
    let raw_destination = raw
        .destination
        .as_ref()
        .ok_or(ConversionError::MissingField("leg.destination"))?;

    let origin = convert_endpoint(raw_origin)?;
    let destination = convert_endpoint(raw_destination)?;

    let planned_departure = parse_time(
        raw_origin.departure_time_planned.as_deref(),
        "origin.departureTimePlanned",
        offset,
    )?;
    let estimated_departure = parse_time(
        raw_origin.departure_time_estimated.as_deref(),
        "origin.departureTimeEstimated",
        offset,
    )?;
    let planned_arrival = parse_time(
        raw_destination.arrival_time_planned.as_deref(),
        "destination.arrivalTimePlanned",
        offset,
    )?;
    let estimated_arrival = parse_time(
        raw_destination.arrival_time_estimated.as_deref(),
        "destination.arrivalTimeEstimated",
        offset,
    )?;

    let transportation = raw
        .transportation
        .as_ref()
        .ok_or(ConversionError::MissingField("leg.transportation"))?;
    let line_name = transportation
        .name
        .clone()
        .ok_or(ConversionError::MissingField("transportation.name"))?;
    let final_station = transportation
        .destination
        .as_ref()
        .and_then(|d| d.name.clone())
        .ok_or(ConversionError::MissingField(
            "transportation.destination.name",
        ))?;

    let stop_sequence = raw
        .stop_sequence
        .iter()
        .map(convert_sequence_stop)
        .collect::<Result<Vec<_>, _>>()?;

    let alerts = raw
        .infos
        .iter()
        .map(convert_alert)
        .collect::<Result<Vec<_>, _>>()?;

    let carriage_count = raw_origin
        .properties
        .as_ref()
        .and_then(|p| p.number_of_cars.clone())
        .unwrap_or_default();

    Ok(Leg {
        duration_secs,
        origin,
        destination,
        planned_departure,
        estimated_departure,
        planned_arrival,
        estimated_arrival,
        line_name,
        final_station,
        stop_sequence,
        alerts,
        carriage_count,
    })
}

/// Convert a leg endpoint.
///
/// Plain stops use the provided name directly and carry no platform.
/// Platform-level entries carry a "Station, Suburb"-style composite name and
/// a prefixed platform code whose numeric suffix is the platform number.
fn convert_endpoint(raw: &RawStopEvent) -> Result<LegStop, ConversionError> {
    let global_id = raw
        .id
        .clone()
        .ok_or(ConversionError::MissingField("stop.id"))?;

    let kind = match raw.kind.as_deref() {
        Some("stop") => StopKind::Stop,
        _ => StopKind::Other,
    };

    let (name, platform) = match kind {
        StopKind::Stop => {
            let name = raw
                .name
                .clone()
                .ok_or(ConversionError::MissingField("stop.name"))?;
            (name, 0)
        }
        StopKind::Other => {
            let disassembled = raw
                .disassembled_name
                .as_deref()
                .ok_or(ConversionError::MissingField("stop.disassembledName"))?;
            let platform = match raw.properties.as_ref().and_then(|p| p.platform.as_deref()) {
                Some(code) => parse_platform_number(code)?,
                None => 0,
            };
            (before_comma(disassembled).to_string(), platform)
        }
    };

    Ok(LegStop {
        name,
        kind,
        platform,
        global_id,
    })
}

/// Convert one stop-sequence entry.
///
/// The platform stays a string here, unlike leg endpoints where it is
/// parsed to a number.
fn convert_sequence_stop(raw: &RawSequenceStop) -> Result<StopRef, ConversionError> {
    let disassembled = raw
        .disassembled_name
        .as_deref()
        .ok_or(ConversionError::MissingField(
            "stopSequence.disassembledName",
        ))?;
    let global_id = raw
        .id
        .clone()
        .ok_or(ConversionError::MissingField("stopSequence.id"))?;

    let platform = raw
        .properties
        .as_ref()
        .and_then(|p| p.platform.as_deref())
        .map(strip_platform_prefix)
        .unwrap_or_default();

    Ok(StopRef {
        name: before_comma(disassembled).to_string(),
        platform,
        global_id,
    })
}

fn convert_alert(raw: &RawInfo) -> Result<Alert, ConversionError> {
    Ok(Alert {
        priority: raw
            .priority
            .clone()
            .ok_or(ConversionError::MissingField("infos.priority"))?,
        title: raw
            .subtitle
            .clone()
            .ok_or(ConversionError::MissingField("infos.subtitle"))?,
        content: raw
            .content
            .clone()
            .ok_or(ConversionError::MissingField("infos.content"))?,
        url: raw
            .url
            .clone()
            .ok_or(ConversionError::MissingField("infos.url"))?,
    })
}

fn parse_time(
    value: Option<&str>,
    field: &'static str,
    offset: TzOffset,
) -> Result<chrono::NaiveDateTime, ConversionError> {
    let s = value.ok_or(ConversionError::MissingField(field))?;
    Ok(offset.parse_timestamp(s)?)
}

/// Substring up to (not including) the first comma.
fn before_comma(s: &str) -> &str {
    match s.find(',') {
        Some(idx) => &s[..idx],
        None => s,
    }
}

/// Drop the fixed tag prefixing a platform code.
fn strip_platform_prefix(code: &str) -> String {
    code.get(PLATFORM_PREFIX_LEN..).unwrap_or("").to_string()
}

/// Parse the numeric suffix of a prefixed platform code.
fn parse_platform_number(code: &str) -> Result<i32, ConversionError> {
    code.get(PLATFORM_PREFIX_LEN..)
        .unwrap_or("")
        .parse()
        .map_err(|_| ConversionError::InvalidPlatform(code.to_string()))
}
