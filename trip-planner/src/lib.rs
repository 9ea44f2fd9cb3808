//! Sydney Trains trip planning client.
//!
//! Resolves free-text station names to stable stop identifiers, requests
//! trip plans from the Transport NSW Trip Planner API, and normalises the
//! nested response into a structured journey model.

pub mod domain;
pub mod favorites;
pub mod stations;
pub mod tfnsw;
