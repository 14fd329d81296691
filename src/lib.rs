//! Analytics derivation for the Habit Hero dashboard.
//!
//! Turns the backend's aggregate payloads (daily completion trend, per
//! category success rates, activity heatmap) into chart-ready datasets,
//! and keeps the latest derived snapshot behind a refresh token so that
//! overlapping refreshes resolve to the newest request.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
