//! Journey and leg types.
//!
//! A `Leg` is one directly-travelled segment between two stops on a single
//! line; a `Journey` is a complete trip offer. This planner only retains
//! direct heavy-rail journeys, so in practice every journey carries exactly
//! one leg, but the model keeps a list so the invariant lives in one place.

use chrono::{Duration, NaiveDateTime};

use super::{Alert, StopRef};

/// Error returned when constructing a journey with no legs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("journey must have at least one leg")]
pub struct EmptyJourney;

/// How the API typed a leg endpoint.
///
/// Plain stops carry a ready-to-use name; anything else is a platform-level
/// entry whose name and platform number must be extracted from composite
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopKind {
    Stop,
    Other,
}

/// One end of a leg: the boarding or alighting point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegStop {
    /// Display name of the station.
    pub name: String,
    /// How the upstream typed this endpoint.
    pub kind: StopKind,
    /// Platform number. Zero for plain stops and when the upstream did not
    /// report one.
    pub platform: i32,
    /// Stable upstream identifier.
    pub global_id: String,
}

/// One directly-travelled segment of a journey.
///
/// All four timestamps are normalised to the same offset-corrected local
/// zone during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// Travel time in seconds, as reported upstream.
    pub duration_secs: u32,
    pub origin: LegStop,
    pub destination: LegStop,
    pub planned_departure: NaiveDateTime,
    pub estimated_departure: NaiveDateTime,
    pub planned_arrival: NaiveDateTime,
    pub estimated_arrival: NaiveDateTime,
    /// Display name of the line (e.g. "Sydney Trains Network T1").
    pub line_name: String,
    /// The line's terminus, not this leg's alighting stop.
    pub final_station: String,
    /// Intermediate stops in travel order.
    pub stop_sequence: Vec<StopRef>,
    pub alerts: Vec<Alert>,
    /// Free-form carriage count; empty when the upstream does not report it.
    pub carriage_count: String,
}

impl Leg {
    /// Returns the travel time as a `chrono::Duration`.
    pub fn duration(&self) -> Duration {
        Duration::seconds(i64::from(self.duration_secs))
    }
}

/// A complete trip offer: its legs plus adult/child fares.
///
/// # Invariants
///
/// - At least one leg (enforced at construction).
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    legs: Vec<Leg>,
    /// Adult fare; zero when the upstream fare block was incomplete.
    pub adult_price: f64,
    /// Child fare; zero when the upstream fare block was incomplete.
    pub child_price: f64,
}

impl Journey {
    /// Construct a journey, validating that it has at least one leg.
    pub fn new(legs: Vec<Leg>, adult_price: f64, child_price: f64) -> Result<Self, EmptyJourney> {
        if legs.is_empty() {
            return Err(EmptyJourney);
        }
        Ok(Self {
            legs,
            adult_price,
            child_price,
        })
    }

    /// Construct a direct (single-leg) journey.
    pub fn direct(leg: Leg, adult_price: f64, child_price: f64) -> Self {
        Self {
            legs: vec![leg],
            adult_price,
            child_price,
        }
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the first leg.
    pub fn first_leg(&self) -> &Leg {
        // Safe: validated non-empty at construction
        &self.legs[0]
    }

    /// Returns the estimated departure time of the first leg.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.first_leg().estimated_departure
    }

    /// Returns the estimated arrival time of the last leg.
    pub fn arrival_time(&self) -> NaiveDateTime {
        // Safe: validated non-empty at construction
        self.legs.last().unwrap().estimated_arrival
    }
}
