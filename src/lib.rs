//! Fetches trail-counter telemetry from the public Eco-Counter API and
//! republishes it, either as one combined in-memory table or as upserts
//! into an open-data catalog.

pub mod argsets;
pub mod command;
pub mod config;
pub mod constants;
pub mod data_mgmt;
pub mod helpers;
pub mod interfaces;
pub mod vendor;
