//! Weather lookup for the kata suite.
//!
//! Geocodes a free-text address, lets the caller pick among the candidates,
//! and fetches current conditions for the chosen coordinates. Both endpoints
//! are key-authenticated HTTP GETs; any non-success status aborts the
//! operation with the status code surfaced to the user.

pub mod client;
pub mod report;
pub mod select;
pub mod types;

pub use client::WeatherClient;
pub use report::{render_location, render_report};
pub use select::{pick_candidate, SelectError};
pub use types::{CurrentConditions, GeocodeCandidate, WeatherError};
