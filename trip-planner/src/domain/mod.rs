//! Domain types for the trip planner.
//!
//! This module contains the core model the rest of the crate works with:
//! journeys, legs, stops, alerts, and offset-corrected local time handling.
//! Values are produced fresh per trip search and owned by the caller;
//! nothing here caches across calls.

mod journey;
mod stop;
mod time;

pub use journey::{EmptyJourney, Journey, Leg, LegStop, StopKind};
pub use stop::{Alert, StopRef};
pub use time::{TimestampError, TzOffset};
